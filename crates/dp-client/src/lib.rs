//! # dp-client
//!
//! HTTP clients for the three remote APIs behind the ingestion pipelines:
//! AlphaVantage daily prices, NewsAPI article search, and a CKAN open-data
//! portal.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio
//! - **Rate Limiting**: governor quota on the AlphaVantage endpoint
//! - **Type Safe**: Strongly typed responses using dp-models
//! - **Configurable**: Environment-based configuration via dp-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dp_client::DataPulseClient;
//! use dp_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = DataPulseClient::new(config)?;
//!
//!     let daily = client.time_series().daily("AAPL").await?;
//!     println!("{} daily bars", daily.time_series.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, dp_core::Error>`. Remote error envelopes
//! (AlphaVantage notes, NewsAPI error status) are classified by the transport
//! before deserialization. There is no retry or backoff anywhere in the
//! client.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::DataPulseClient;
pub use dp_core::{Config, Error, Result};
