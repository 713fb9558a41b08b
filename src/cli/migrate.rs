use anyhow::Result;
use sqlx::migrate::MigrateDatabase;

use crate::config::Config;

pub async fn migrate(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Database migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Dropping existing database...");
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
