//! HTTP API for the todo service.
//!
//! # Overview
//! Maps the five todo routes onto a shared `Storage` and encodes results as
//! JSON. Every failure is returned as an `ApiError`, whose `IntoResponse`
//! impl is the only place an error response is built.
//!
//! # Design
//! - Storage is injected through `app()` and reaches handlers via axum
//!   `State`; there is no global state.
//! - `run()` takes an already-bound listener so tests can bind port 0.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use todo_core::Storage;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorBody, ErrorResponse};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

pub fn app(storage: Arc<dyn Storage>) -> Router {
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { storage })
}

pub async fn run(listener: TcpListener, storage: Arc<dyn Storage>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(storage)).await
}
