//! # dp-loaders
//!
//! Pipeline drivers for the datapulse ingestion workloads.
//!
//! This crate provides two loaders:
//! - Stock sentiment: daily prices, rolling volatility, scored news
//!   headlines, audited per-instrument transactions
//! - Transit delays: CKAN datastore pagination with lenient type coercion

pub mod coerce;
pub mod delay_loader;
pub mod error;
pub mod instruments;
pub mod loader;
pub mod scoring;
pub mod sentiment_loader;
pub mod volatility;

// Re-export commonly used types
pub use error::{LoaderError, LoaderResult};
pub use loader::{DataLoader, LoaderConfig, LoaderContext};

// Re-export loaders
pub use delay_loader::{DelayLoader, DelayLoaderInput, DelayLoaderOutput};
pub use instruments::{Instrument, TRACKED_INSTRUMENTS};
pub use sentiment_loader::{SentimentLoader, SentimentLoaderInput, SentimentLoaderOutput};

// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        DataLoader, DelayLoader, DelayLoaderInput, LoaderConfig, LoaderContext, LoaderError,
        LoaderResult, SentimentLoader, SentimentLoaderInput,
    };
}
