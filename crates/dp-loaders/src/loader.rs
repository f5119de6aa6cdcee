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

//! Base traits and types for data loaders

use crate::LoaderResult;
use async_trait::async_trait;
use dp_client::DataPulseClient;
use std::sync::Arc;

/// Configuration for data loaders
#[derive(Debug, Clone)]
pub struct LoaderConfig {
  /// Postgres connection string
  pub database_url: String,

  /// Keep going after a per-item failure instead of aborting the run
  pub continue_on_error: bool,
}

impl LoaderConfig {
  pub fn new(database_url: String) -> Self {
    Self { database_url, continue_on_error: true }
  }
}

/// Shared context for all loaders
pub struct LoaderContext {
  pub client: Arc<DataPulseClient>,
  pub config: LoaderConfig,
}

impl LoaderContext {
  pub fn new(client: Arc<DataPulseClient>, config: LoaderConfig) -> Self {
    Self { client, config }
  }
}

/// Base trait for all data loaders
#[async_trait]
pub trait DataLoader: Send + Sync {
  /// The type of data this loader processes
  type Input;

  /// The result type after loading
  type Output;

  /// Load data from the given input
  async fn load(&self, context: &LoaderContext, input: Self::Input) -> LoaderResult<Self::Output>;

  /// Validate input before loading
  async fn validate_input(&self, _input: &Self::Input) -> LoaderResult<()> {
    Ok(())
  }

  /// Get loader name for logging/tracking
  fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client() -> Arc<DataPulseClient> {
    let config =
      dp_core::Config::default_with_keys("test_key".to_string(), "test_key".to_string());
    Arc::new(DataPulseClient::new(config).expect("Failed to create client"))
  }

  #[test]
  fn test_loader_config_new() {
    let config = LoaderConfig::new("postgres://localhost/test".to_string());
    assert_eq!(config.database_url, "postgres://localhost/test");
    assert!(config.continue_on_error);
  }

  #[test]
  fn test_loader_config_custom() {
    let config = LoaderConfig {
      database_url: "postgres://localhost/other".to_string(),
      continue_on_error: false,
    };
    assert!(!config.continue_on_error);
  }

  #[test]
  fn test_loader_config_clone() {
    let config = LoaderConfig::new("postgres://localhost/test".to_string());
    let cloned = config.clone();
    assert_eq!(config.database_url, cloned.database_url);
    assert_eq!(config.continue_on_error, cloned.continue_on_error);
  }

  #[test]
  fn test_loader_config_debug() {
    let config = LoaderConfig::new("postgres://localhost/test".to_string());
    let debug_str = format!("{:?}", config);
    assert!(debug_str.contains("LoaderConfig"));
    assert!(debug_str.contains("database_url"));
  }

  #[test]
  fn test_loader_context_new() {
    let client = test_client();
    let loader_config = LoaderConfig::new("postgres://localhost/test".to_string());

    let context = LoaderContext::new(client, loader_config);

    assert!(context.config.continue_on_error);
    assert_eq!(context.config.database_url, "postgres://localhost/test");
  }
}
