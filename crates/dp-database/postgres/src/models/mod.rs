pub mod delay;
pub mod log;
pub mod sentiment;

// Re-export commonly used types
pub use delay::{NewTtcDelay, TtcDelay};
pub use log::{ApiLog, NewApiLog, STATUS_FAILED, STATUS_SUCCESS};
pub use sentiment::{NewStockSentiment, StockSentiment};
