//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is the stored entity. The two request payloads carry only the
//! fields a client may set: ids are assigned by storage and `done` always
//! starts out false, so neither appears in `CreateTodoRequest`.

use serde::{Deserialize, Serialize};

/// Identifier assigned by storage on insert. Zero means "not yet assigned".
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for replacing the mutable fields of an existing todo.
///
/// This is a full replacement: an omitted `description` or `done` resets the
/// stored value to its default rather than leaving it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl From<CreateTodoRequest> for Todo {
    fn from(request: CreateTodoRequest) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            done: false,
        }
    }
}

impl From<UpdateTodoRequest> for Todo {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            done: request.done,
        }
    }
}
