//! Student query routing service.
//!
//! Classifies each free-text query as math-like or general with a keyword
//! heuristic, dispatches to the computational-knowledge engine or the
//! language model accordingly, and returns the textual answer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tutor_core::{ComputeEngine, TextCompletion};

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub llm: Arc<dyn TextCompletion>,
    pub compute: Arc<dyn ComputeEngine>,
}

/// Builds the service router.
pub fn build_app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/query", post(handlers::handle_query))
        .with_state(state)
}
