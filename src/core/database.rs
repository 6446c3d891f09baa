use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::DatabaseConfig;

/// Open the pool and, unless disabled, bring the schema and reference data up to date
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let url = config
        .url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    tracing::info!(
        "Database pool ready (max_connections={})",
        config.max_connections
    );

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Migration failed")?;
        tracing::info!("Trivia schema migrated");
    } else {
        tracing::info!("DB_RUN_MIGRATIONS=false, leaving the schema as found");
    }

    Ok(pool)
}
