use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::error::BackofficeError;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (\
     id BLOB PRIMARY KEY, \
     email TEXT NOT NULL UNIQUE, \
     first_name TEXT NOT NULL, \
     last_name TEXT NOT NULL, \
     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP)";

const CREATE_INVOICES: &str = "CREATE TABLE IF NOT EXISTS invoices (id BLOB PRIMARY KEY)";

/// Opens the connection pool and ensures the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, BackofficeError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // An in-memory database lives only as long as its connection, so pin the
    // pool to a single connection that is never recycled.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    init_schema(&pool).await?;
    debug!("Database ready at {}", database_url);
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), BackofficeError> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_INVOICES).execute(pool).await?;
    Ok(())
}
