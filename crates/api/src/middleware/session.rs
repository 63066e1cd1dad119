//! Request-scoped database session extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use todo_db::DbPool;

use crate::error::AppError;
use crate::state::AppState;

/// One pooled connection owned by a single request.
///
/// Returned to the pool when the value is dropped, which happens as the
/// handler returns whether it succeeded, failed, or unwound. Never shared
/// across requests.
///
/// Handlers without a body take it as an extractor, placed after any path
/// extractor so a bad id is rejected first:
///
/// ```ignore
/// async fn get_by_id(TodoId(id): TodoId, mut session: DbSession) -> AppResult<Json<Todo>> { .. }
/// ```
///
/// Handlers with a body parse it first and then call [`DbSession::acquire`],
/// since the body extractor has to come last.
#[derive(Debug)]
pub struct DbSession(PoolConnection<Postgres>);

impl DbSession {
    /// Check a connection out of the pool, waiting at most the pool's
    /// acquire timeout.
    pub async fn acquire(pool: &DbPool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        DbSession::acquire(&state.pool).await
    }
}

impl Deref for DbSession {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
