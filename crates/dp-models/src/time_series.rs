//! Time series data models for AlphaVantage daily stock prices

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common metadata returned by AlphaVantage time series responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Information about the data
    #[serde(rename = "1. Information")]
    pub information: String,

    /// Symbol for the security
    #[serde(rename = "2. Symbol")]
    pub symbol: String,

    /// Last refreshed timestamp
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,

    /// Output size (Compact or Full)
    #[serde(rename = "4. Output Size", skip_serializing_if = "Option::is_none")]
    pub output_size: Option<String>,

    /// Time zone
    #[serde(rename = "5. Time Zone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// OHLCV data point for price data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvData {
    /// Opening price
    #[serde(rename = "1. open")]
    pub open: String,

    /// Highest price
    #[serde(rename = "2. high")]
    pub high: String,

    /// Lowest price
    #[serde(rename = "3. low")]
    pub low: String,

    /// Closing price
    #[serde(rename = "4. close")]
    pub close: String,

    /// Trading volume
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Date-keyed time series data.
///
/// A `BTreeMap` keyed by ISO date string sorts lexicographically, which for
/// `YYYY-MM-DD` keys is chronological order.
pub type TimeSeriesData = BTreeMap<String, OhlcvData>;

/// Daily time series response.
///
/// Deserialization fails if the `"Time Series (Daily)"` key is absent, which
/// is how a malformed or error-shaped response propagates to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTimeSeries {
    /// Metadata about the time series
    #[serde(rename = "Meta Data")]
    pub meta_data: Metadata,

    /// Daily time series data
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: TimeSeriesData,
}
