//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the caller's `&mut PgConnection` as the first argument, so a
//! request-scoped session flows through every statement.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
