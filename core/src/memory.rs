//! In-process `Storage` backed by an ordered map.
//!
//! # Design
//! A single `std::sync::Mutex` guards both the map and the id counter, so
//! id assignment and the insert that uses it happen atomically. Every
//! operation holds the lock only for a map lookup or mutation and never
//! across an `.await`. `get_all` returns todos in ascending id order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StorageError;
use crate::storage::Storage;
use crate::types::{Todo, TodoId};

#[derive(Debug)]
struct Inner {
    todos: BTreeMap<TodoId, Todo>,
    /// `None` once an id of `u64::MAX` has been handed out.
    next_id: Option<TodoId>,
}

/// Mutex-guarded in-memory todo store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                todos: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        let inner = self.lock()?;
        Ok(inner.todos.values().cloned().collect())
    }

    fn get(&self, id: TodoId) -> Result<Todo, StorageError> {
        let inner = self.lock()?;
        inner.todos.get(&id).cloned().ok_or(StorageError::NotFound(id))
    }

    fn insert(&self, todo: &mut Todo) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        let id = match todo.id {
            0 => inner
                .next_id
                .ok_or_else(|| StorageError::Backend("id space exhausted".to_string()))?,
            explicit => explicit,
        };
        if inner.todos.contains_key(&id) {
            return Err(StorageError::Conflict(id));
        }
        // Explicit ids push the counter forward so auto ids never collide.
        if inner.next_id.is_some_and(|next| next <= id) {
            inner.next_id = id.checked_add(1);
        }
        todo.id = id;
        inner.todos.insert(id, todo.clone());
        tracing::debug!(id = todo.id, "todo inserted");
        Ok(())
    }

    fn update(&self, todo: Todo, id: TodoId) -> Result<Todo, StorageError> {
        let mut inner = self.lock()?;
        let stored = inner.todos.get_mut(&id).ok_or(StorageError::NotFound(id))?;
        stored.title = todo.title;
        stored.description = todo.description;
        stored.done = todo.done;
        tracing::debug!(id, "todo updated");
        Ok(stored.clone())
    }

    fn delete(&self, id: TodoId) -> Result<Todo, StorageError> {
        let mut inner = self.lock()?;
        let removed = inner.todos.remove(&id).ok_or(StorageError::NotFound(id))?;
        tracing::debug!(id, "todo deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str) -> Todo {
        Todo {
            title: title.to_string(),
            ..Todo::default()
        }
    }

    #[test]
    fn insert_assigns_sequential_ids_from_one() {
        let storage = MemoryStorage::new();
        let mut first = todo("first");
        let mut second = todo("second");
        storage.insert(&mut first).unwrap();
        storage.insert(&mut second).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn insert_explicit_id_advances_counter() {
        let storage = MemoryStorage::new();
        let mut explicit = Todo { id: 10, ..todo("explicit") };
        storage.insert(&mut explicit).unwrap();

        let mut auto = todo("auto");
        storage.insert(&mut auto).unwrap();
        assert_eq!(auto.id, 11);
    }

    #[test]
    fn insert_duplicate_id_conflicts() {
        let storage = MemoryStorage::new();
        let mut a = Todo { id: 3, ..todo("a") };
        let mut b = Todo { id: 3, ..todo("b") };
        storage.insert(&mut a).unwrap();
        assert_eq!(storage.insert(&mut b), Err(StorageError::Conflict(3)));
        assert_eq!(storage.get(3).unwrap().title, "a");
    }

    #[test]
    fn auto_id_after_max_id_is_exhausted_not_overwritten() {
        let storage = MemoryStorage::new();
        let mut pinned = Todo { id: u64::MAX, ..todo("pinned") };
        storage.insert(&mut pinned).unwrap();

        let mut auto = todo("auto");
        assert_eq!(
            storage.insert(&mut auto),
            Err(StorageError::Backend("id space exhausted".to_string()))
        );
        assert_eq!(auto.id, 0);
        assert_eq!(storage.get(u64::MAX).unwrap().title, "pinned");
        assert_eq!(storage.get_all().unwrap().len(), 1);
    }

    #[test]
    fn explicit_ids_below_counter_still_insert() {
        let storage = MemoryStorage::new();
        storage.insert(&mut Todo { id: 5, ..todo("five") }).unwrap();
        storage.insert(&mut Todo { id: 2, ..todo("two") }).unwrap();

        let mut auto = todo("auto");
        storage.insert(&mut auto).unwrap();
        assert_eq!(auto.id, 6);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let storage = MemoryStorage::new();
        let mut a = todo("a");
        storage.insert(&mut a).unwrap();
        storage.delete(a.id).unwrap();

        let mut b = todo("b");
        storage.insert(&mut b).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn update_keeps_stored_id() {
        let storage = MemoryStorage::new();
        let mut original = todo("original");
        storage.insert(&mut original).unwrap();

        let replacement = Todo {
            id: 42,
            title: "replaced".to_string(),
            description: "new".to_string(),
            done: true,
        };
        let updated = storage.update(replacement, original.id).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "replaced");
        assert!(storage.get(42).is_err());
    }

    #[test]
    fn get_all_orders_by_id() {
        let storage = MemoryStorage::new();
        for (id, title) in [(5, "five"), (1, "one"), (3, "three")] {
            storage.insert(&mut Todo { id, ..todo(title) }).unwrap();
        }
        let ids: Vec<TodoId> = storage.get_all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
