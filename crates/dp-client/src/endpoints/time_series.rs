//! AlphaVantage time series endpoint (TIME_SERIES_DAILY)

use crate::transport::Transport;
use dp_core::Result;
use dp_models::time_series::DailyTimeSeries;
use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
    RateLimiter,
};
use std::sync::Arc;
use tracing::instrument;

/// Daily price data for a stock symbol.
///
/// Requests are throttled through the shared rate limiter since the
/// AlphaVantage free tier enforces a per-minute quota.
pub struct TimeSeriesEndpoints {
    transport: Arc<Transport>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    base_url: String,
    api_key: String,
}

impl TimeSeriesEndpoints {
    /// Create a new time series endpoints instance
    pub fn new(
        transport: Arc<Transport>,
        rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
        base_url: String,
        api_key: String,
    ) -> Self {
        Self { transport, rate_limiter, base_url, api_key }
    }

    /// Get daily time series data (compact output, latest 100 days)
    ///
    /// # Arguments
    ///
    /// * `symbol` - The stock symbol (e.g., "AAPL", "005930.KQ")
    #[instrument(skip(self), fields(symbol))]
    pub async fn daily(&self, symbol: &str) -> Result<DailyTimeSeries> {
        self.daily_with_size(symbol, "compact").await
    }

    /// Get daily time series data with specific output size
    ///
    /// `output_size` is "compact" (latest 100 data points) or "full"
    /// (up to 20 years).
    #[instrument(skip(self), fields(symbol, output_size))]
    pub async fn daily_with_size(
        &self,
        symbol: &str,
        output_size: &str,
    ) -> Result<DailyTimeSeries> {
        self.rate_limiter.until_ready().await;

        let endpoint = format!("{}/query", self.base_url);
        self.transport
            .get(
                &endpoint,
                &[
                    ("function", "TIME_SERIES_DAILY"),
                    ("symbol", symbol),
                    ("outputsize", output_size),
                    ("apikey", &self.api_key),
                ],
            )
            .await
    }
}
