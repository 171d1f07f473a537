//! Repository trait for todo persistence.
//!
//! This module defines the abstract interface for storing and retrieving
//! [`Todo`] records. Implementations live in [`crate::db::repositories`]:
//! an in-memory store for tests and local development, and a Diesel-backed
//! Postgres store for production.

use async_trait::async_trait;

use crate::models::{Todo, TodoId};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for todo CRUD operations.
///
/// The operations mirror a generic keyed store: callers that need
/// missing-row errors (rather than empty results) are expected to check
/// existence first.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch every stored todo, in storage-default order.
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>>;

    /// Fetch a single todo by id.
    ///
    /// # Returns
    /// * `Ok(Some(todo))` if the id exists
    /// * `Ok(None)` if it does not (a missing id is not an error)
    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Option<Todo>>;

    /// Persist a todo.
    ///
    /// If `todo.id` is unset a new row is inserted and a fresh unique id is
    /// assigned; if set, the row with that id is overwritten.
    ///
    /// # Returns
    /// * `Ok(Todo)` - the persisted record with id populated
    async fn save(&self, todo: Todo) -> RepositoryResult<Todo>;

    /// Check whether a todo with the given id exists.
    async fn exists_by_id(&self, id: TodoId) -> RepositoryResult<bool>;

    /// Delete the todo with the given id.
    ///
    /// Deleting a missing id is not an error; callers check existence first.
    ///
    /// # Returns
    /// * `Ok(usize)` - number of rows removed (0 or 1)
    async fn delete_by_id(&self, id: TodoId) -> RepositoryResult<usize>;

    /// Check that the storage backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
