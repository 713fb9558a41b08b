use anyhow::Result;
use portfolio_db::{Migrate, Plan};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Connection options applied to every pooled connection
///
/// - WAL mode enables concurrent reads alongside the single writer
/// - busy_timeout reduces SQLITE_BUSY errors
/// - synchronous=NORMAL is safe with WAL
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true))
}

/// Create a pool, creating the database file if missing
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Apply every pending schema migration
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    portfolio_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(())
}
