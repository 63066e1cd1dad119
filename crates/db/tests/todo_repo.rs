//! Integration tests for the `todos` repository.
//!
//! Exercises the repository layer against a real database:
//! - Create / list / find round trips
//! - Partial update semantics
//! - Delete and repeat delete
//! - Row locking under concurrent patches

use assert_matches::assert_matches;
use sqlx::PgPool;
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_todo(title: &str) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: format!("{title} description"),
        completed: false,
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    todo_db::health_check(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_distinct_ids(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let first = TodoRepo::create(&mut conn, &new_todo("First")).await.unwrap();
    let second = TodoRepo::create(&mut conn, &new_todo("Second")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.title, "First");
    assert_eq!(first.description, "First description");
    assert!(!first.completed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = TodoRepo::create(&mut conn, &new_todo("Find me")).await.unwrap();

    let found = TodoRepo::find_by_id(&mut conn, created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = TodoRepo::find_by_id(&mut conn, 999_999).await.unwrap();
    assert_matches!(missing, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_every_row(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(TodoRepo::list(&mut conn).await.unwrap().is_empty());

    for title in ["A", "B", "C"] {
        TodoRepo::create(&mut conn, &new_todo(title)).await.unwrap();
    }

    let todos = TodoRepo::list(&mut conn).await.unwrap();
    assert_eq!(todos.len(), 3);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_completed_only(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = TodoRepo::create(&mut conn, &new_todo("Patch me")).await.unwrap();

    let patch = UpdateTodo {
        completed: Some(true),
        ..Default::default()
    };
    let updated = TodoRepo::update(&mut conn, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert!(updated.completed);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_empty_patch_changes_nothing(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = TodoRepo::create(&mut conn, &new_todo("Leave me")).await.unwrap();

    let updated = TodoRepo::update(&mut conn, created.id, &UpdateTodo::default())
        .await
        .unwrap();
    assert_eq!(updated, Some(created.clone()));

    let stored = TodoRepo::find_by_id(&mut conn, created.id).await.unwrap();
    assert_eq!(stored, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_false_overwrites_true(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut input = new_todo("Done already");
    input.completed = true;
    let created = TodoRepo::create(&mut conn, &input).await.unwrap();

    let patch = UpdateTodo {
        completed: Some(false),
        ..Default::default()
    };
    let updated = TodoRepo::update(&mut conn, created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert!(!updated.completed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_writes_nothing(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let existing = TodoRepo::create(&mut conn, &new_todo("Bystander")).await.unwrap();

    let patch = UpdateTodo {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = TodoRepo::update(&mut conn, 999_999, &patch).await.unwrap();
    assert_matches!(result, None);

    let todos = TodoRepo::list(&mut conn).await.unwrap();
    assert_eq!(todos, vec![existing]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_disjoint_patches_both_land(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = TodoRepo::create(&mut conn, &new_todo("Contended")).await.unwrap();
    drop(conn);

    let mut left = pool.acquire().await.unwrap();
    let mut right = pool.acquire().await.unwrap();

    let title_patch = UpdateTodo {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let completed_patch = UpdateTodo {
        completed: Some(true),
        ..Default::default()
    };

    let (a, b) = tokio::join!(
        TodoRepo::update(&mut left, created.id, &title_patch),
        TodoRepo::update(&mut right, created.id, &completed_patch),
    );
    assert!(a.unwrap().is_some());
    assert!(b.unwrap().is_some());

    let stored = TodoRepo::find_by_id(&mut left, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Renamed");
    assert!(stored.completed);
    assert_eq!(stored.description, created.description);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = TodoRepo::create(&mut conn, &new_todo("Delete me")).await.unwrap();

    assert!(TodoRepo::delete(&mut conn, created.id).await.unwrap());
    assert!(!TodoRepo::delete(&mut conn, created.id).await.unwrap());

    assert_matches!(TodoRepo::find_by_id(&mut conn, created.id).await.unwrap(), None);
    assert!(TodoRepo::list(&mut conn).await.unwrap().is_empty());
}
