//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - Session persistence over a `PgPool`
//! - [`connect`] / [`run_migrations`] - Pool construction and schema setup

mod session_repository;

pub use session_repository::PostgresSessionRepository;

use secrecy::ExposeSecret;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Build a connection pool from the database configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_size)
        .max_connections(config.max_size)
        .acquire_timeout(config.max_wait())
        .idle_timeout(config.evict_idle_after())
        .test_before_acquire(config.check_on_borrow)
        .connect(config.url.expose_secret())
        .await?;

    tracing::info!(
        min_size = config.min_size,
        max_size = config.max_size,
        "Connected to session database"
    );
    Ok(pool)
}

/// Apply the bundled migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
