use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use tracing::info;

use dp_client::DataPulseClient;
use dp_loaders::{DataLoader, DelayLoader, DelayLoaderInput, LoaderConfig, LoaderContext};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct DelaysArgs {
  /// Open-data package to ingest
  #[arg(short, long, default_value = dp_core::DEFAULT_DELAY_PACKAGE)]
  package: String,
}

pub async fn execute(args: DelaysArgs, config: Config) -> Result<()> {
  let client = Arc::new(DataPulseClient::new(config.api_config)?);

  let loader_config = LoaderConfig::new(config.database_url);
  let context = LoaderContext::new(client, loader_config);

  let loader = DelayLoader::new();
  let input = DelayLoaderInput { package_id: args.package };
  loader.validate_input(&input).await?;

  let output = loader.load(&context, input).await?;

  info!(
    "Delay load finished: {} resources processed, {} skipped, {} records fetched, {} inserted",
    output.resources_processed, output.resources_skipped, output.records_fetched,
    output.records_inserted
  );

  Ok(())
}
