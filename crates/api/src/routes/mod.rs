pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST   /create          create a todo
/// GET    /todo            list todos
/// GET    /todo/{id}       fetch one todo
/// PATCH  /update/{id}     partially update a todo
/// DELETE /delete/{id}     delete a todo
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(todo::router())
}
