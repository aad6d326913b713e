//! One handler per route. Each parses its input, makes exactly one storage
//! call and returns 200 with a JSON body, or hands an `ApiError` upward.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::{CreateTodoRequest, Todo, TodoId, UpdateTodoRequest};

use crate::error::ApiError;
use crate::AppState;

/// Parse a path segment as a base-10 `u64`. Signs, whitespace and anything
/// else `str::parse` would tolerate are rejected.
pub fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Parse(raw.to_string()));
    }
    raw.parse().map_err(|_| ApiError::Parse(raw.to_string()))
}

/// The `{id}` path segment, already parsed. Every way the segment can be
/// malformed, including percent-encoding that is not UTF-8, becomes
/// `ApiError::Parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state).await?;
        parse_todo_id(&raw_id).map(TodoIdPath)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[tracing::instrument(skip(state))]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.storage.get_all()?;
    Ok(Json(todos))
}

#[tracing::instrument(skip(state, body))]
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let input: CreateTodoRequest = decode(&body?)?;
    let mut todo = Todo::from(input);
    state.storage.insert(&mut todo)?;
    tracing::info!(id = todo.id, "todo created");
    Ok(Json(todo))
}

#[tracing::instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.storage.get(id)?))
}

#[tracing::instrument(skip(state, body))]
pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let input: UpdateTodoRequest = decode(&body?)?;
    let todo = state.storage.update(Todo::from(input), id)?;
    tracing::info!(id, done = todo.done, "todo updated");
    Ok(Json(todo))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.storage.delete(id)?;
    tracing::info!(id, "todo deleted");
    Ok(Json(todo))
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
