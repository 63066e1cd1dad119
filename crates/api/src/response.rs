//! Acknowledgement bodies for mutating endpoints.
//!
//! Reads return the entity itself; updates and deletes answer with a keyed
//! acknowledgement naming the affected id.

use serde::Serialize;
use todo_core::types::DbId;
use todo_db::models::todo::Todo;

/// Body of a successful `PATCH /api/update/{id}`.
///
/// Serializes as `{"todo updated": id, "id": .., "title": .., ...}` so
/// clients get both the acknowledgement and the fresh row.
#[derive(Debug, Serialize)]
pub struct TodoUpdated {
    #[serde(rename = "todo updated")]
    pub updated_id: DbId,
    #[serde(flatten)]
    pub todo: Todo,
}

/// Body of a successful `DELETE /api/delete/{id}`.
#[derive(Debug, Serialize)]
pub struct TodoDeleted {
    #[serde(rename = "todo deleted")]
    pub deleted_id: DbId,
}
