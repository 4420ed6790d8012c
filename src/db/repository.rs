//! Table-driven CRUD statements shared by every resource.
//!
//! A [`Table`] names its table, primary key and mutable columns, and knows how
//! to bind a submitted form to statement parameters in column order. The free
//! functions here build the matching SQL and run it against the pool.

use serde::de::DeserializeOwned;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use tracing::debug;

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Storage layout of one resource
pub trait Table: 'static {
    /// Table name
    const TABLE: &'static str;

    /// Store-generated primary key column
    const KEY: &'static str;

    /// Every mutable column, in the order `bind` supplies values
    const COLUMNS: &'static [&'static str];

    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    type Form: DeserializeOwned + 'static;

    /// Bind one value per entry of `COLUMNS`, in the same order
    fn bind<'q>(form: &'q Self::Form, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

fn select_sql<T: Table>() -> String {
    format!("SELECT {}, {} FROM {}", T::KEY, T::COLUMNS.join(", "), T::TABLE)
}

/// Every row of the table, in primary key order
pub async fn list<T: Table>(pool: &SqlitePool) -> Result<Vec<T::Row>, sqlx::Error> {
    let sql = format!("{} ORDER BY {}", select_sql::<T>(), T::KEY);

    let rows = sqlx::query_as::<_, T::Row>(&sql).fetch_all(pool).await?;

    debug!("Fetched {} rows from {}", rows.len(), T::TABLE);
    Ok(rows)
}

/// The row with the given id, if any
pub async fn find<T: Table>(pool: &SqlitePool, id: i64) -> Result<Option<T::Row>, sqlx::Error> {
    let sql = format!("{} WHERE {} = ?", select_sql::<T>(), T::KEY);

    sqlx::query_as::<_, T::Row>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new row and return the id the store generated for it
pub async fn create<T: Table>(pool: &SqlitePool, form: &T::Form) -> Result<i64, sqlx::Error> {
    let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders
    );

    let result = T::bind(form, sqlx::query(&sql)).execute(pool).await?;

    debug!("Inserted into {} with {}={}", T::TABLE, T::KEY, result.last_insert_rowid());
    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable column of the row with the given id
///
/// Returns the number of rows affected; zero when no row has that id.
pub async fn update<T: Table>(
    pool: &SqlitePool,
    id: i64,
    form: &T::Form,
) -> Result<u64, sqlx::Error> {
    let assignments = T::COLUMNS
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE {} SET {} WHERE {} = ?", T::TABLE, assignments, T::KEY);

    let result = T::bind(form, sqlx::query(&sql))
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Remove the row with the given id
///
/// Returns the number of rows affected; zero when no row has that id.
pub async fn delete<T: Table>(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE {} = ?", T::TABLE, T::KEY);

    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    Ok(result.rows_affected())
}
