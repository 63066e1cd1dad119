//! Handlers for the todo resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::middleware::extractors::{JsonBody, TodoId};
use crate::middleware::session::DbSession;
use crate::response::{TodoDeleted, TodoUpdated};
use crate::state::AppState;

/// POST /api/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let todo = TodoRepo::create(&mut session, &input).await?;
    tracing::info!(id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todo
pub async fn list(mut session: DbSession) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&mut session).await?;
    Ok(Json(todos))
}

/// GET /api/todo/{id}
pub async fn get_by_id(TodoId(id): TodoId, mut session: DbSession) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::find_by_id(&mut session, id)
        .await?
        .ok_or(CoreError::todo_not_found(id))?;
    Ok(Json(todo))
}

/// PATCH /api/update/{id}
pub async fn update(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    JsonBody(patch): JsonBody<UpdateTodo>,
) -> AppResult<Json<TodoUpdated>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let todo = TodoRepo::update(&mut session, id, &patch)
        .await?
        .ok_or(CoreError::todo_not_found(id))?;
    tracing::info!(id, "Todo updated");

    Ok(Json(TodoUpdated {
        updated_id: id,
        todo,
    }))
}

/// DELETE /api/delete/{id}
pub async fn delete(TodoId(id): TodoId, mut session: DbSession) -> AppResult<Json<TodoDeleted>> {
    if !TodoRepo::delete(&mut session, id).await? {
        return Err(CoreError::todo_not_found(id).into());
    }
    tracing::info!(id, "Todo deleted");
    Ok(Json(TodoDeleted { deleted_id: id }))
}
