//! `GET /health`: liveness plus a view of the connection pool.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use todo_db::DbPool;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStats,
}

/// Connections currently open, and how many of those no request holds.
#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
}

impl HealthReport {
    async fn collect(pool: &DbPool) -> Self {
        let db_healthy = match todo_db::health_check(pool).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Database health check failed");
                false
            }
        };

        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            // Sampled after the check so its connection counts as idle again.
            pool: PoolStats {
                size: pool.size(),
                idle: pool.num_idle(),
            },
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::collect(&state.pool).await)
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
