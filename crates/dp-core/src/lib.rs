pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Sources recorded in the `source` column of the `api_log` audit table.
///
/// The `Display` form is the exact string written to the column. Only the
/// stock pipeline writes audit entries, so the open-data portal does not
/// appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiSource {
  /// AlphaVantage market data (TIME_SERIES_DAILY)
  AlphaVantage,
  /// NewsAPI full-text article search
  NewsApi,
  /// Local Postgres database
  Database,
}

impl std::fmt::Display for ApiSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ApiSource::AlphaVantage => write!(f, "AlphaVantage"),
      ApiSource::NewsApi => write!(f, "NewsAPI"),
      ApiSource::Database => write!(f, "Database"),
    }
  }
}

/// Base URL for the AlphaVantage API
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

/// Base URL for NewsAPI
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

/// Base URL for the Toronto open-data CKAN instance
pub const OPEN_DATA_BASE_URL: &str = "https://ckan0.cf.opendata.inter.prod-toronto.ca";

/// Default open-data package holding the TTC bus delay resources
pub const DEFAULT_DELAY_PACKAGE: &str = "ttc-bus-delay-data";

/// API rate limit for AlphaVantage (requests per minute, free tier)
pub const DEFAULT_RATE_LIMIT: u32 = 75;

/// Articles requested per NewsAPI search
pub const NEWS_PAGE_SIZE: u32 = 5;

/// Records requested per datastore_search page
pub const DATASTORE_PAGE_SIZE: i64 = 1000;
