//! Error type shared by every `Storage` implementation.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the handler layer maps it to a
//! 404 while everything else is a server-side failure. `Backend` carries an
//! implementation-defined message and is never shown to HTTP clients.

use crate::types::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No todo is stored under this id.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// A todo with this id already exists.
    #[error("todo {0} already exists")]
    Conflict(TodoId),

    /// The backing store failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}
