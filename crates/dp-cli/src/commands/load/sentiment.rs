use anyhow::{Result, anyhow};
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

use dp_client::DataPulseClient;
use dp_loaders::{
  DataLoader, LoaderConfig, LoaderContext, SentimentLoader, SentimentLoaderInput,
  TRACKED_INSTRUMENTS,
};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct SentimentArgs {
  /// Restrict the run to specific tracked symbols (repeatable)
  #[arg(short, long)]
  symbol: Vec<String>,

  /// Abort the run on the first failed instrument
  #[arg(long)]
  fail_fast: bool,
}

pub async fn execute(args: SentimentArgs, config: Config) -> Result<()> {
  let client = Arc::new(DataPulseClient::new(config.api_config)?);

  let loader_config = LoaderConfig {
    database_url: config.database_url,
    continue_on_error: !args.fail_fast,
  };
  let context = LoaderContext::new(client, loader_config);

  let instruments = if args.symbol.is_empty() {
    TRACKED_INSTRUMENTS.to_vec()
  } else {
    let selected: Vec<_> = TRACKED_INSTRUMENTS
      .iter()
      .filter(|i| args.symbol.iter().any(|s| s.eq_ignore_ascii_case(i.symbol)))
      .copied()
      .collect();
    if selected.is_empty() {
      return Err(anyhow!(
        "none of {:?} are tracked symbols; tracked: {:?}",
        args.symbol,
        TRACKED_INSTRUMENTS.iter().map(|i| i.symbol).collect::<Vec<_>>()
      ));
    }
    selected
  };

  let loader = SentimentLoader::new();
  let input = SentimentLoaderInput { instruments };
  loader.validate_input(&input).await?;

  let output = loader.load(&context, input).await?;

  info!(
    "Sentiment load finished: {} instruments processed, {} failed, {} headlines inserted",
    output.instruments_processed, output.instruments_failed, output.headlines_inserted
  );
  for error in &output.errors {
    warn!("  {}", error);
  }

  Ok(())
}
