//! Route definitions for the todo resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(todo::create))
        .route("/todo", get(todo::list))
        .route("/todo/{id}", get(todo::get_by_id))
        .route("/update/{id}", patch(todo::update))
        .route("/delete/{id}", delete(todo::delete))
}
