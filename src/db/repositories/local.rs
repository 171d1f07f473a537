//! In-memory repository implementation.
//!
//! `LocalRepository` keeps todos in a `BTreeMap` guarded by a `parking_lot`
//! read-write lock, with an atomic sequence for id assignment. It is the
//! default backend for unit tests and local development, and implements the
//! same contract as the Postgres backend.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::repository::{RepositoryResult, TodoRepository};
use crate::models::{Todo, TodoId};

/// In-memory todo store.
pub struct LocalRepository {
    todos: RwLock<BTreeMap<i64, Todo>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    /// Create an empty repository. Ids are assigned starting at 1.
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored todos.
    pub fn len(&self) -> usize {
        self.todos.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.read().is_empty()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for LocalRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>> {
        Ok(self.todos.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Option<Todo>> {
        Ok(self.todos.read().get(&id.value()).cloned())
    }

    async fn save(&self, mut todo: Todo) -> RepositoryResult<Todo> {
        let mut todos = self.todos.write();

        let id = match todo.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly assigned ids.
                self.next_id.fetch_max(id.value() + 1, Ordering::Relaxed);
                id.value()
            }
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        todo.id = Some(TodoId::new(id));
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn exists_by_id(&self, id: TodoId) -> RepositoryResult<bool> {
        Ok(self.todos.read().contains_key(&id.value()))
    }

    async fn delete_by_id(&self, id: TodoId) -> RepositoryResult<usize> {
        match self.todos.write().remove(&id.value()) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
