//! Transit delay pipeline.
//!
//! Resolves a CKAN package to its datastore-backed resources, pages every
//! active resource's records out of `datastore_search`, coerces the loose
//! upstream typing into typed columns and inserts one Postgres row per
//! record.

use async_trait::async_trait;
use diesel::PgConnection;
use tracing::{debug, info};

use dp_core::DEFAULT_DELAY_PACKAGE;
use dp_database_postgres::{connection::establish_connection, models::NewTtcDelay};
use dp_models::open_data::DelayRecord;

use crate::{
    coerce::{opt_i32, opt_string, parse_timestamp},
    error::{LoaderError, LoaderResult},
    loader::{DataLoader, LoaderContext},
};

/// Input for the delay loader
#[derive(Debug, Clone)]
pub struct DelayLoaderInput {
    /// CKAN package id to ingest
    pub package_id: String,
}

impl Default for DelayLoaderInput {
    fn default() -> Self {
        Self { package_id: DEFAULT_DELAY_PACKAGE.to_string() }
    }
}

/// Output from the delay loader
#[derive(Debug, Default)]
pub struct DelayLoaderOutput {
    pub resources_processed: usize,
    pub resources_skipped: usize,
    pub records_fetched: usize,
    pub records_inserted: usize,
}

/// Delay loader implementation
pub struct DelayLoader;

impl DelayLoader {
    pub fn new() -> Self {
        Self
    }

    /// Narrow one loosely typed upstream record into an insertable row.
    ///
    /// Coercion never fails a record; fields that cannot be narrowed become
    /// `NULL` columns.
    fn to_row(record: &DelayRecord) -> NewTtcDelay {
        NewTtcDelay {
            day: record.day.clone(),
            record_id: opt_i32(record.id.as_ref(), "_id"),
            date: record.date.as_deref().and_then(parse_timestamp),
            time: record.time.clone(),
            bound: record.bound.clone(),
            route: opt_string(record.route.as_ref()),
            min_gap: opt_i32(record.min_gap.as_ref(), "Min Gap"),
            station: record.station.clone(),
            vehicle: opt_string(record.vehicle.as_ref()),
            incident: record.incident.clone(),
            min_delay: opt_i32(record.min_delay.as_ref(), "Min Delay"),
        }
    }

    /// Insert the records of one resource, row by row. Database errors abort
    /// the run; rows inserted so far stay committed.
    fn insert_records(
        conn: &mut PgConnection,
        records: &[DelayRecord],
    ) -> LoaderResult<usize> {
        let mut inserted = 0;
        for record in records {
            Self::to_row(record).insert(conn)?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

impl Default for DelayLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataLoader for DelayLoader {
    type Input = DelayLoaderInput;
    type Output = DelayLoaderOutput;

    async fn load(
        &self,
        context: &LoaderContext,
        input: Self::Input,
    ) -> LoaderResult<Self::Output> {
        let mut conn = establish_connection(&context.config.database_url)?;
        let mut output = DelayLoaderOutput::default();

        let package = context.client.open_data().package_show(&input.package_id).await?;
        if !package.success {
            return Err(LoaderError::ApiError(format!(
                "package_show reported failure for {}",
                input.package_id
            )));
        }

        info!(
            package = input.package_id,
            resources = package.result.resources.len(),
            "package resolved"
        );

        for resource in &package.result.resources {
            if !resource.datastore_active {
                debug!(
                    resource = resource.id,
                    name = resource.name.as_deref().unwrap_or("<unnamed>"),
                    "skipping resource without datastore backing"
                );
                output.resources_skipped += 1;
                continue;
            }

            let records = context.client.open_data().datastore_records(&resource.id).await?;
            info!(
                resource = resource.id,
                name = resource.name.as_deref().unwrap_or("<unnamed>"),
                records = records.len(),
                "resource fetched"
            );
            output.records_fetched += records.len();

            let inserted = Self::insert_records(&mut conn, &records)?;
            output.records_inserted += inserted;
            output.resources_processed += 1;
        }

        info!(
            processed = output.resources_processed,
            skipped = output.resources_skipped,
            fetched = output.records_fetched,
            inserted = output.records_inserted,
            "delay run complete"
        );
        Ok(output)
    }

    async fn validate_input(&self, input: &Self::Input) -> LoaderResult<()> {
        if input.package_id.trim().is_empty() {
            return Err(LoaderError::InvalidData("empty package id".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DelayLoader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from_json(value: serde_json::Value) -> DelayRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_to_row_typical_record() {
        let record = record_from_json(json!({
            "_id": 17,
            "Day": "Monday",
            "Date": "2024-01-15T00:00:00",
            "Time": "08:30",
            "Bound": "N",
            "Route": 36,
            "Min Gap": "20",
            "Station": "FINCH STATION",
            "Vehicle": 8421,
            "Incident": "Mechanical",
            "Min Delay": 10
        }));
        let row = DelayLoader::to_row(&record);
        assert_eq!(row.record_id, Some(17));
        assert_eq!(row.day.as_deref(), Some("Monday"));
        assert_eq!(row.date.unwrap().to_string(), "2024-01-15 00:00:00");
        assert_eq!(row.time.as_deref(), Some("08:30"));
        assert_eq!(row.route.as_deref(), Some("36"));
        assert_eq!(row.min_gap, Some(20));
        assert_eq!(row.vehicle.as_deref(), Some("8421"));
        assert_eq!(row.min_delay, Some(10));
    }

    #[test]
    fn test_to_row_uncoercible_fields_become_null() {
        let record = record_from_json(json!({
            "_id": "seventeen",
            "Date": "not a date",
            "Route": "504",
            "Min Gap": "None",
            "Min Delay": null
        }));
        let row = DelayLoader::to_row(&record);
        assert_eq!(row.record_id, None);
        assert_eq!(row.date, None);
        assert_eq!(row.route.as_deref(), Some("504"));
        assert_eq!(row.min_gap, None);
        assert_eq!(row.min_delay, None);
        assert_eq!(row.day, None);
    }

    #[test]
    fn test_to_row_empty_record() {
        let record = record_from_json(json!({}));
        let row = DelayLoader::to_row(&record);
        assert_eq!(row.record_id, None);
        assert_eq!(row.date, None);
        assert_eq!(row.station, None);
    }

    #[tokio::test]
    async fn test_validate_input_rejects_blank_package() {
        let loader = DelayLoader::new();
        let input = DelayLoaderInput { package_id: "  ".to_string() };
        assert!(loader.validate_input(&input).await.is_err());
    }

    #[tokio::test]
    async fn test_default_input_targets_ttc_package() {
        let input = DelayLoaderInput::default();
        assert_eq!(input.package_id, DEFAULT_DELAY_PACKAGE);
        let loader = DelayLoader::new();
        assert!(loader.validate_input(&input).await.is_ok());
    }
}
