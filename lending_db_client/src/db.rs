use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Open the SQLite pool for the service.
///
/// Foreign keys are enforced on every connection; the database file is
/// created on first start.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("invalid database url")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("could not connect to db")?;

    Ok(pool)
}

/// Bring the schema up to date.
pub async fn run_migrations(db: &SqlitePool) -> Result<()> {
    sqlx::migrate!()
        .run(db)
        .await
        .context("could not run migrations")?;

    Ok(())
}
