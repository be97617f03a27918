//! Assignment generation service.
//!
//! Accepts a subject and topic, asks the language model for graded questions
//! via a fixed prompt template, and returns the first ten numbered lines of
//! the reply, renumbered.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tutor_core::TextCompletion;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub llm: Arc<dyn TextCompletion>,
}

/// Builds the service router.
pub fn build_app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/generate-assignment", post(handlers::generate_assignment))
        .with_state(state)
}
