//! The single adapter that turns handler failures into HTTP responses.
//!
//! # Design
//! Handlers only build success responses. Anything that goes wrong is
//! returned as an `ApiError`, and `IntoResponse` gives every route the same
//! status mapping and the same JSON body shape:
//!
//! ```json
//! {"error": {"code": "NOT_FOUND", "message": "todo 7 not found"}}
//! ```
//!
//! Server-side failures are logged with their detail but answered with a
//! generic message.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::{StorageError, TodoId};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not valid JSON or has the wrong shape.
    #[error("invalid request body: {0}")]
    Decode(String),

    /// The `id` path segment is not a base-10 unsigned integer.
    #[error("invalid todo id {0:?}")]
    Parse(String),

    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("no route for this request")]
    RouteNotFound,

    #[error("method not allowed for this route")]
    MethodNotAllowed,

    /// The request body exceeds the server's body limit.
    #[error("request body too large")]
    PayloadTooLarge,

    #[error(transparent)]
    Storage(StorageError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::Parse(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(StorageError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "DECODE_ERROR",
            ApiError::Parse(_) => "PARSE_ERROR",
            ApiError::NotFound(_) | ApiError::RouteNotFound => "NOT_FOUND",
            ApiError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ApiError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiError::Storage(StorageError::Conflict(_)) => "CONFLICT",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Parse(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Decode(rejection.body_text())
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Storage(other),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal storage error".to_string()
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
