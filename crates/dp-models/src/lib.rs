//! # dp-models
//!
//! Strongly-typed response models for the three remote APIs the ingestion
//! pipelines consume:
//!
//! - AlphaVantage `TIME_SERIES_DAILY` (date-keyed OHLCV series)
//! - NewsAPI `everything` full-text article search
//! - CKAN open-data `package_show` and `datastore_search`
//!
//! All models are plain serde structures; field extraction and type coercion
//! happen in `dp-loaders`.
//!
//! ```ignore
//! use dp_models::time_series::DailyTimeSeries;
//!
//! let daily: DailyTimeSeries = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod news;
pub mod open_data;
pub mod time_series;

// Re-export all model types
pub use news::*;
pub use open_data::*;
pub use time_series::*;
