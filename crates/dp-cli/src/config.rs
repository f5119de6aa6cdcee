use anyhow::{Context, Result};
use dp_core::Config as CoreConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub database_url: String,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config = CoreConfig::from_env().context("failed to load API configuration")?;

    let database_url =
      env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;

    Ok(Self { api_config, database_url })
  }
}
