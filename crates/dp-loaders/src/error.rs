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

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LoaderError {
  #[error("API error: {0}")]
  ApiError(String),

  #[error("Database error: {0}")]
  DatabaseError(String),

  #[error("Serialization error: {0}")]
  SerializationError(String),

  #[error("Invalid data: {0}")]
  InvalidData(String),
}

// Implement conversions manually
impl From<serde_json::Error> for LoaderError {
  fn from(err: serde_json::Error) -> Self {
    LoaderError::SerializationError(err.to_string())
  }
}

impl From<dp_core::Error> for LoaderError {
  fn from(err: dp_core::Error) -> Self {
    LoaderError::ApiError(err.to_string())
  }
}

impl From<diesel::result::Error> for LoaderError {
  fn from(err: diesel::result::Error) -> Self {
    LoaderError::DatabaseError(err.to_string())
  }
}

impl From<diesel::ConnectionError> for LoaderError {
  fn from(err: diesel::ConnectionError) -> Self {
    LoaderError::DatabaseError(err.to_string())
  }
}

pub type LoaderResult<T> = Result<T, LoaderError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_loader_error_display_api_error() {
    let err = LoaderError::ApiError("connection failed".to_string());
    assert_eq!(err.to_string(), "API error: connection failed");
  }

  #[test]
  fn test_loader_error_display_database_error() {
    let err = LoaderError::DatabaseError("connection refused".to_string());
    assert_eq!(err.to_string(), "Database error: connection refused");
  }

  #[test]
  fn test_loader_error_display_invalid_data() {
    let err = LoaderError::InvalidData("missing symbol".to_string());
    assert_eq!(err.to_string(), "Invalid data: missing symbol");
  }

  #[test]
  fn test_loader_error_from_core_error() {
    let core_err = dp_core::Error::Config("bad config".to_string());
    let err = LoaderError::from(core_err);
    assert!(matches!(err, LoaderError::ApiError(_)));
    assert!(err.to_string().contains("Configuration error"));
  }

  #[test]
  fn test_loader_error_from_serde_json_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
    let err = LoaderError::from(json_err);
    assert!(matches!(err, LoaderError::SerializationError(_)));
  }

  #[test]
  fn test_loader_error_clone() {
    let err = LoaderError::ApiError("test".to_string());
    let cloned = err.clone();
    assert_eq!(err.to_string(), cloned.to_string());
  }
}
