//! Configuration management for the ingestion pipelines

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct shared by both pipelines
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// AlphaVantage API key
  pub alpha_vantage_key: String,

  /// NewsAPI key
  pub news_api_key: String,

  /// Base URL for the AlphaVantage API
  pub alpha_vantage_url: String,

  /// Base URL for NewsAPI
  pub news_api_url: String,

  /// Base URL for the CKAN open-data portal
  pub open_data_url: String,

  /// AlphaVantage rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let alpha_vantage_key = env::var("ALPHA_VANTAGE_API_KEY")
      .map_err(|_| Error::ApiKey("ALPHA_VANTAGE_API_KEY not set".to_string()))?;

    let news_api_key = env::var("NEWS_API_KEY")
      .map_err(|_| Error::ApiKey("NEWS_API_KEY not set".to_string()))?;

    let alpha_vantage_url =
      env::var("AV_BASE_URL").unwrap_or_else(|_| crate::ALPHA_VANTAGE_BASE_URL.to_string());

    let news_api_url =
      env::var("NEWS_API_BASE_URL").unwrap_or_else(|_| crate::NEWS_API_BASE_URL.to_string());

    let open_data_url =
      env::var("OPEN_DATA_BASE_URL").unwrap_or_else(|_| crate::OPEN_DATA_BASE_URL.to_string());

    let rate_limit = env::var("DP_RATE_LIMIT")
      .unwrap_or_else(|_| "75".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid DP_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("DP_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid DP_TIMEOUT_SECS".to_string()))?;

    Ok(Config {
      alpha_vantage_key,
      news_api_key,
      alpha_vantage_url,
      news_api_url,
      open_data_url,
      rate_limit,
      timeout_secs,
    })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_keys(alpha_vantage_key: String, news_api_key: String) -> Self {
    Config {
      alpha_vantage_key,
      news_api_key,
      alpha_vantage_url: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
      news_api_url: crate::NEWS_API_BASE_URL.to_string(),
      open_data_url: crate::OPEN_DATA_BASE_URL.to_string(),
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
    }
  }
}
