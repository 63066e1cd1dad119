//! Storage layer for the todo service.
//!
//! Owns the PostgreSQL pool lifecycle ([`connect`] / [`close`]), the bundled
//! migrations, and the `todos` repository.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DatabaseConfig;

pub type DbPool = sqlx::PgPool;

/// Open a connection pool described by `config`.
///
/// The pool is the process-wide storage handle; pair every call with
/// [`close`] during shutdown.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.database_url)?.ssl_mode(config.ssl_mode);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(config.max_lifetime)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Close every pooled connection and wait for them to be released.
pub async fn close(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
