//! Repository for the `todos` table.

use sqlx::{Connection, PgConnection};
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row with its assigned id.
    pub async fn create(conn: &mut PgConnection, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_one(conn)
            .await
    }

    /// List every todo in id order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(conn).await
    }

    /// Find a todo by its id.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Apply a partial update. Only non-`None` fields in `patch` are written.
    ///
    /// The row is locked for the duration of the transaction, so concurrent
    /// patches to the same id apply one after the other. Returns `None` if no
    /// row with the given `id` exists; nothing is written in that case.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        patch: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        // Dropping `tx` on any early return rolls the transaction back.
        let mut tx = conn.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM todos WHERE id = $1 FOR UPDATE");
        let Some(mut todo) = sqlx::query_as::<_, Todo>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        todo.apply(patch);

        let update = format!(
            "UPDATE todos SET
                title = $2,
                description = $3,
                completed = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Todo>(&update)
            .bind(id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Permanently delete a todo by id. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
