use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};

pub mod delays;
pub mod sentiment;

#[derive(Args, Debug)]
pub struct LoadCommand {
  #[command(subcommand)]
  command: LoadSubcommands,
}

#[derive(Subcommand, Debug)]
enum LoadSubcommands {
  /// Fetch prices and news for the tracked instruments and store scored headlines
  Sentiment(sentiment::SentimentArgs),

  /// Fetch TTC delay records from the open-data portal and store them
  Delays(delays::DelaysArgs),
}

pub async fn execute(cmd: LoadCommand, config: Config) -> Result<()> {
  match cmd.command {
    LoadSubcommands::Sentiment(args) => sentiment::execute(args, config).await,
    LoadSubcommands::Delays(args) => delays::execute(args, config).await,
  }
}
