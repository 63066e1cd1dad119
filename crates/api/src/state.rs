/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers borrow from it through
    /// [`crate::middleware::session::DbSession`].
    pub pool: todo_db::DbPool,
}
