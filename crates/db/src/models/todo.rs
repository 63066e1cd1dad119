//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// DTO for creating a new todo. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// DTO for patching an existing todo.
///
/// `None` means the field was omitted (or sent as `null`) and the stored
/// value is kept. `Some(false)` and `Some("")` are real values and are
/// written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    /// Overwrite each field the patch provides; leave the rest untouched.
    pub fn apply(&mut self, patch: &UpdateTodo) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}
