//! Transit delay rows: one row per upstream datastore record

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::ttc_delays;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = ttc_delays)]
pub struct TtcDelay {
    pub id: i32,
    pub day: Option<String>,
    pub record_id: Option<i32>,
    pub date: Option<NaiveDateTime>,
    pub time: Option<String>,
    pub bound: Option<String>,
    pub route: Option<String>,
    pub min_gap: Option<i32>,
    pub station: Option<String>,
    pub vehicle: Option<String>,
    pub incident: Option<String>,
    pub min_delay: Option<i32>,
}

/// Insertable variant; every payload column is nullable since upstream
/// records are sparse and loosely typed. No uniqueness is enforced on
/// `record_id`, so re-runs append duplicates.
#[derive(Insertable, Debug, Clone, Default)]
#[diesel(table_name = ttc_delays)]
pub struct NewTtcDelay {
    pub day: Option<String>,
    pub record_id: Option<i32>,
    pub date: Option<NaiveDateTime>,
    pub time: Option<String>,
    pub bound: Option<String>,
    pub route: Option<String>,
    pub min_gap: Option<i32>,
    pub station: Option<String>,
    pub vehicle: Option<String>,
    pub incident: Option<String>,
    pub min_delay: Option<i32>,
}

impl NewTtcDelay {
    /// Insert a single delay row in its own implicit transaction
    pub fn insert(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::insert_into(ttc_delays::table).values(self).execute(conn)
    }
}
