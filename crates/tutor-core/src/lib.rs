//! Core domain types and backend trait definitions.
//!
//! This crate defines the error type and the two backend abstractions shared
//! by the tutor services: free-form text completion (language model) and
//! computational answers (knowledge engine). Handlers depend on these traits
//! rather than concrete clients so tests can inject fakes.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to a remote backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse backend response: {0}")]
    Parse(String),
}

/// A backend that turns a prompt into free-form text.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Human-readable backend name, used in error strings shown to clients.
    fn name(&self) -> &str;

    /// Generates a completion for the given user input, optionally steered
    /// by a system prompt.
    async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_input: &str,
    ) -> Result<String, BackendError>;
}

/// A backend that answers structured or mathematical queries with a
/// computed result.
#[async_trait]
pub trait ComputeEngine: Send + Sync {
    /// Human-readable backend name, used in error strings shown to clients.
    fn name(&self) -> &str;

    /// Computes an answer for the given query.
    async fn compute(&self, query: &str) -> Result<String, BackendError>;
}
