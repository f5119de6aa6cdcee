//! Stock sentiment rows: one row per scored headline

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::stock_sentiment;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = stock_sentiment)]
pub struct StockSentiment {
    pub id: i32,
    pub stock_symbol: String,
    pub company_name: String,
    pub headline: String,
    pub source: String,
    pub sentiment_score: f64,
    pub published_at: Option<NaiveDateTime>,
    pub price_at_time: f64,
    pub country: String,
    pub volatility_7d: Option<f64>,
    pub c_time: DateTime<Utc>,
}

/// Owned insertable variant built from API responses.
///
/// `price_at_time` and `volatility_7d` are fetched once per instrument and
/// repeated on every headline row of that instrument within a run.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_sentiment)]
pub struct NewStockSentiment {
    pub stock_symbol: String,
    pub company_name: String,
    pub headline: String,
    pub source: String,
    pub sentiment_score: f64,
    pub published_at: Option<NaiveDateTime>,
    pub price_at_time: f64,
    pub country: String,
    pub volatility_7d: Option<f64>,
}

impl NewStockSentiment {
    /// Insert a batch of headline rows
    pub fn insert_all(conn: &mut PgConnection, rows: &[Self]) -> QueryResult<usize> {
        diesel::insert_into(stock_sentiment::table).values(rows).execute(conn)
    }
}
