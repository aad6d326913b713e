//! The persistence capability the handler layer depends on.

use crate::error::StorageError;
use crate::types::{Todo, TodoId};

/// A swappable store of todos keyed by `TodoId`.
///
/// Implementations are shared across request tasks behind an `Arc`, so they
/// must be `Send + Sync` and handle their own locking.
pub trait Storage: Send + Sync {
    /// Returns every stored todo in implementation-defined order.
    fn get_all(&self) -> Result<Vec<Todo>, StorageError>;

    /// Returns the todo stored under `id`, or `StorageError::NotFound`.
    fn get(&self, id: TodoId) -> Result<Todo, StorageError>;

    /// Stores `todo`. If `todo.id` is zero a fresh id is assigned and written
    /// back into `todo`. Fails with `StorageError::Conflict` when the id is
    /// already taken.
    fn insert(&self, todo: &mut Todo) -> Result<(), StorageError>;

    /// Replaces the title, description and done flag of the todo at `id`
    /// with those of `todo` and returns the stored result. The stored id is
    /// never changed; `todo.id` is ignored.
    fn update(&self, todo: Todo, id: TodoId) -> Result<Todo, StorageError>;

    /// Removes and returns the todo at `id`.
    fn delete(&self, id: TodoId) -> Result<Todo, StorageError>;
}
