//! # Lydia DB
//!
//! Database pool and persistence adapters for the Lydia API.
//!
//! - [`init_db_pool`]: Builds the shared PostgreSQL pool from [`DatabaseConfig`]
//! - [`accounts`]: [`PgAccountStore`], the PostgreSQL account store
//!
//! # Example
//!
//! ```ignore
//! use lydia_db::{PgAccountStore, init_db_pool};
//!
//! let pool = init_db_pool(&database_config).await?;
//! let store = PgAccountStore::new(pool.clone());
//! ```

pub mod accounts;

use anyhow::Context;
use lydia_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use accounts::PgAccountStore;
// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool.
///
/// Call once during start-up; the pool is cheaply cloneable and is shared by
/// every request. Query timeouts are the pool defaults.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let url = config
        .url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// Applies the workspace migrations.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    Ok(())
}
