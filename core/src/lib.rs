//! Domain types and storage capability for the todo service.
//!
//! # Overview
//! Defines the `Todo` entity and its request payloads, the five-operation
//! `Storage` trait the HTTP layer is written against, and `MemoryStorage`,
//! an in-process implementation used by the server binary and by tests.
//!
//! # Design
//! - `Storage` is object safe so the server can hold an `Arc<dyn Storage>`
//!   and swap implementations without generics leaking into handlers.
//! - Operations are synchronous. Implementations decide their own
//!   concurrency discipline; `MemoryStorage` serializes through one mutex.
//! - `StorageError::NotFound` is distinct so callers can map it to 404.

pub mod error;
pub mod memory;
pub mod storage;
pub mod types;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use storage::Storage;
pub use types::{CreateTodoRequest, Todo, TodoId, UpdateTodoRequest};
