use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error;

/// Create a SQLite connection pool
///
/// # Parameters
/// - `database_url`: SQLite connection string, e.g. `sqlite://tiger_temp.db`
/// - `max_connections`: upper bound on pooled connections
///
/// The database file is created if it does not exist and foreign key
/// enforcement is switched on for every connection.
pub async fn get_connection(database_url: &str, max_connections: u32) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Isolated in-memory database with the schema applied.
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// is pinned to a single connection that never expires.
#[cfg(test)]
pub async fn in_memory() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory database");

    super::schema::create_tables(&pool)
        .await
        .expect("schema bootstrap");

    pool
}
