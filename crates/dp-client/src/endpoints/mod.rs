//! Per-API endpoint modules.
//!
//! Each endpoint struct owns an `Arc<Transport>` plus whatever base URL and
//! credentials its API needs. Only the AlphaVantage endpoint is rate limited;
//! NewsAPI and the open-data portal are called a handful of times per run.

pub mod news;
pub mod open_data;
pub mod time_series;
