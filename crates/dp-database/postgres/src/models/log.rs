//! Append-only audit log for the stock sentiment pipeline

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::api_log;

/// `status` value for a successful per-instrument unit of work
pub const STATUS_SUCCESS: &str = "Success";

/// `status` value for a failed per-instrument unit of work
pub const STATUS_FAILED: &str = "Failed";

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = api_log)]
pub struct ApiLog {
    pub id: i32,
    pub stock_symbol: String,
    pub source: String,
    pub status: String,
    pub message: String,
    pub c_time: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = api_log)]
pub struct NewApiLog<'a> {
    pub stock_symbol: &'a str,
    pub source: &'a str,
    pub status: &'a str,
    pub message: &'a str,
}

impl NewApiLog<'_> {
    /// Insert a single log row.
    ///
    /// Failure entries are written outside the per-instrument transaction so
    /// they survive its rollback.
    pub fn insert(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::insert_into(api_log::table).values(self).execute(conn)
    }
}
