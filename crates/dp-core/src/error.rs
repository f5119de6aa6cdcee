use thiserror::Error;

/// The main error type for dp-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key")]
  ApiKey(String),

  /// API rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error reported by the remote API
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for dp-* crates
pub type Result<T> = std::result::Result<T, Error>;
