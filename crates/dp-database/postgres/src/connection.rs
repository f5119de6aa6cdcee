use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Establish a database connection.
///
/// Both pipelines hold a single connection for the lifetime of the run.
pub fn establish_connection(database_url: &str) -> Result<PgConnection, diesel::ConnectionError> {
  PgConnection::establish(database_url)
}
