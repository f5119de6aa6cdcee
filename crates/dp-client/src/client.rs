/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{
  news::NewsEndpoints, open_data::OpenDataEndpoints, time_series::TimeSeriesEndpoints,
};

use crate::transport::Transport;
use dp_core::{Config, Result};
use governor::{
  Quota, RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main client for the three remote APIs the pipelines consume.
///
/// Provides access to the AlphaVantage, NewsAPI and CKAN open-data endpoints
/// through organized endpoint modules, sharing one HTTP transport.
///
/// # Examples
///
/// ```ignore
/// use dp_client::DataPulseClient;
/// use dp_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = DataPulseClient::new(config)?;
///
///     let daily = client.time_series().daily("AAPL").await?;
///     let news = client.news().everything("Apple").await?;
///     let package = client.open_data().package_show("ttc-bus-delay-data").await?;
///
///     Ok(())
/// }
/// ```
pub struct DataPulseClient {
  rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
  transport: Arc<Transport>,
  config: Config,
}

impl DataPulseClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit).unwrap_or_else(|| {
      NonZeroU32::new(dp_core::DEFAULT_RATE_LIMIT).expect("DEFAULT_RATE_LIMIT must be non-zero")
    });
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter, config })
  }

  /// Get access to the AlphaVantage time series endpoints
  pub fn time_series(&self) -> TimeSeriesEndpoints {
    TimeSeriesEndpoints::new(
      self.transport.clone(),
      self.rate_limiter.clone(),
      self.config.alpha_vantage_url.clone(),
      self.config.alpha_vantage_key.clone(),
    )
  }

  /// Get access to the NewsAPI endpoints
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(
      self.transport.clone(),
      self.config.news_api_url.clone(),
      self.config.news_api_key.clone(),
    )
  }

  /// Get access to the open-data portal endpoints
  pub fn open_data(&self) -> OpenDataEndpoints {
    OpenDataEndpoints::new(self.transport.clone(), self.config.open_data_url.clone())
  }
}

impl std::fmt::Debug for DataPulseClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DataPulseClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
