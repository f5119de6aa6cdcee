//! Stock sentiment pipeline.
//!
//! For each tracked instrument: fetch daily prices from AlphaVantage,
//! derive the trailing 7-day volatility, search NewsAPI for headlines,
//! score each headline with VADER and insert one row per headline. Each
//! instrument commits in its own transaction, and every unit of work
//! leaves a row in `api_log`.

use async_trait::async_trait;
use chrono::DateTime;
use diesel::{Connection, PgConnection};
use tracing::{debug, info, warn};

use dp_core::ApiSource;
use dp_database_postgres::{
    connection::establish_connection,
    models::{NewApiLog, NewStockSentiment, STATUS_FAILED, STATUS_SUCCESS},
};
use dp_models::{news::Article, time_series::DailyTimeSeries};

use crate::{
    error::{LoaderError, LoaderResult},
    instruments::{Instrument, TRACKED_INSTRUMENTS},
    loader::{DataLoader, LoaderContext},
    scoring::HeadlineScorer,
    volatility::{rolling_volatility, VOLATILITY_WINDOW},
};

/// Input for the sentiment loader
#[derive(Debug, Clone)]
pub struct SentimentLoaderInput {
    /// Instruments to process; defaults to the tracked set
    pub instruments: Vec<Instrument>,
}

impl Default for SentimentLoaderInput {
    fn default() -> Self {
        Self { instruments: TRACKED_INSTRUMENTS.to_vec() }
    }
}

/// Output from the sentiment loader
#[derive(Debug, Default)]
pub struct SentimentLoaderOutput {
    pub instruments_processed: usize,
    pub instruments_failed: usize,
    pub headlines_inserted: usize,
    pub errors: Vec<String>,
}

/// An error tagged with the API stage it came from, so the audit log can
/// attribute failures to the right source.
struct StageError {
    source: ApiSource,
    error: LoaderError,
}

/// Per-instrument data fetched from the two APIs before any insert happens
struct InstrumentBatch {
    rows: Vec<NewStockSentiment>,
}

/// Sentiment loader implementation
pub struct SentimentLoader {
    scorer: HeadlineScorer,
}

impl SentimentLoader {
    pub fn new() -> Self {
        Self { scorer: HeadlineScorer::new() }
    }

    /// Fetch prices and headlines for one instrument and build its rows.
    ///
    /// No database work happens here; both API calls must succeed before
    /// anything is staged for insert.
    async fn fetch_instrument(
        &self,
        context: &LoaderContext,
        instrument: &Instrument,
    ) -> Result<InstrumentBatch, StageError> {
        let daily = context
            .client
            .time_series()
            .daily(instrument.symbol)
            .await
            .map_err(|e| StageError { source: ApiSource::AlphaVantage, error: e.into() })?;

        let closes = closes_chronological(&daily)
            .map_err(|error| StageError { source: ApiSource::AlphaVantage, error })?;
        let price_at_time = latest_close(&closes)
            .map_err(|error| StageError { source: ApiSource::AlphaVantage, error })?;
        let volatility_7d = rolling_volatility(&closes, VOLATILITY_WINDOW);
        if volatility_7d.is_none() {
            debug!(
                symbol = instrument.symbol,
                closes = closes.len(),
                "not enough history for volatility, storing NULL"
            );
        }

        let news = context
            .client
            .news()
            .everything(instrument.name)
            .await
            .map_err(|e| StageError { source: ApiSource::NewsApi, error: e.into() })?;

        let mut rows = Vec::with_capacity(news.articles.len());
        for article in &news.articles {
            match self.article_to_row(instrument, article, price_at_time, volatility_7d) {
                Some(row) => rows.push(row),
                None => {
                    debug!(symbol = instrument.symbol, "skipping article without a headline")
                }
            }
        }
        Ok(InstrumentBatch { rows })
    }

    /// Score one article into a sentiment row. Articles without a headline
    /// (delisted upstream) produce no row.
    fn article_to_row(
        &self,
        instrument: &Instrument,
        article: &Article,
        price_at_time: f64,
        volatility_7d: Option<f64>,
    ) -> Option<NewStockSentiment> {
        let headline = article.title.as_deref()?;
        let published_at = article
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.naive_utc());

        Some(NewStockSentiment {
            stock_symbol: instrument.symbol.to_string(),
            company_name: instrument.name.to_string(),
            headline: headline.to_string(),
            source: article.source.name.clone(),
            sentiment_score: self.scorer.compound(headline),
            published_at,
            price_at_time,
            country: instrument.country.to_string(),
            volatility_7d,
        })
    }

    /// Commit one instrument's rows and its success log entry atomically.
    ///
    /// On error the transaction has rolled back and nothing from this
    /// instrument is persisted; earlier instruments' commits are unaffected.
    pub fn commit_instrument(
        conn: &mut PgConnection,
        instrument: &Instrument,
        rows: &[NewStockSentiment],
    ) -> Result<usize, diesel::result::Error> {
        let source = ApiSource::NewsApi.to_string();
        conn.transaction(|conn| {
            let inserted = NewStockSentiment::insert_all(conn, rows)?;
            let message = format!("{} headlines processed.", inserted);
            NewApiLog {
                stock_symbol: instrument.symbol,
                source: &source,
                status: STATUS_SUCCESS,
                message: &message,
            }
            .insert(conn)?;
            Ok(inserted)
        })
    }

    /// Record a failure in `api_log`, outside any transaction so the entry
    /// survives the rollback it is reporting on.
    pub fn log_failure(
        conn: &mut PgConnection,
        instrument: &Instrument,
        source: ApiSource,
        message: &str,
    ) {
        let source = source.to_string();
        let entry = NewApiLog {
            stock_symbol: instrument.symbol,
            source: &source,
            status: STATUS_FAILED,
            message,
        };
        if let Err(e) = entry.insert(conn) {
            warn!(symbol = instrument.symbol, error = %e, "failed to write audit log entry");
        }
    }
}

impl Default for SentimentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataLoader for SentimentLoader {
    type Input = SentimentLoaderInput;
    type Output = SentimentLoaderOutput;

    async fn load(
        &self,
        context: &LoaderContext,
        input: Self::Input,
    ) -> LoaderResult<Self::Output> {
        let mut conn = establish_connection(&context.config.database_url)?;
        let mut output = SentimentLoaderOutput::default();

        for instrument in &input.instruments {
            info!(symbol = instrument.symbol, company = instrument.name, "processing instrument");

            match self.fetch_instrument(context, instrument).await {
                Ok(batch) => match Self::commit_instrument(&mut conn, instrument, &batch.rows) {
                    Ok(inserted) => {
                        info!(symbol = instrument.symbol, inserted, "instrument committed");
                        output.instruments_processed += 1;
                        output.headlines_inserted += inserted;
                    }
                    Err(e) => {
                        // The transaction rolled back; nothing from this
                        // instrument was persisted.
                        warn!(symbol = instrument.symbol, error = %e, "insert failed, rolled back");
                        let message = format!("Error: {}", e);
                        Self::log_failure(&mut conn, instrument, ApiSource::Database, &message);
                        output.instruments_failed += 1;
                        output.errors.push(format!("{}: {}", instrument.symbol, e));
                        if !context.config.continue_on_error {
                            return Err(e.into());
                        }
                    }
                },
                Err(stage) => {
                    warn!(
                        symbol = instrument.symbol,
                        source = %stage.source,
                        error = %stage.error,
                        "fetch failed, skipping instrument"
                    );
                    let message = format!("Error: {}", stage.error);
                    Self::log_failure(&mut conn, instrument, stage.source, &message);
                    output.instruments_failed += 1;
                    output.errors.push(format!("{}: {}", instrument.symbol, stage.error));
                    if !context.config.continue_on_error {
                        return Err(stage.error);
                    }
                }
            }
        }

        info!(
            processed = output.instruments_processed,
            failed = output.instruments_failed,
            headlines = output.headlines_inserted,
            "sentiment run complete"
        );
        Ok(output)
    }

    async fn validate_input(&self, input: &Self::Input) -> LoaderResult<()> {
        if input.instruments.is_empty() {
            return Err(LoaderError::InvalidData("no instruments to process".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SentimentLoader"
    }
}

/// Closing prices in chronological order, parsed from the series strings.
fn closes_chronological(daily: &DailyTimeSeries) -> LoaderResult<Vec<f64>> {
    daily
        .time_series
        .values()
        .map(|ohlcv| {
            ohlcv.close.parse::<f64>().map_err(|_| {
                LoaderError::InvalidData(format!("unparseable close price: {}", ohlcv.close))
            })
        })
        .collect()
}

/// Most recent closing price
fn latest_close(closes: &[f64]) -> LoaderResult<f64> {
    closes
        .last()
        .copied()
        .ok_or_else(|| LoaderError::InvalidData("empty time series".to_string()))
}
