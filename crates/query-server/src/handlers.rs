//! HTTP route handlers for the query service.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{StudentQueryRequest, StudentQueryResponse, WelcomeResponse};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Welcome / liveness route.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the student query service!".to_string(),
    })
}

const LOG_PREVIEW_CHARS: usize = 50;

/// Truncates a query for logging, respecting char boundaries.
fn query_preview(query: &str) -> String {
    match query.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &query[..idx]),
        None => query.to_string(),
    }
}

/// Routes a student query to the right backend and returns its answer.
pub async fn handle_query(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<StudentQueryRequest>,
) -> Result<Json<StudentQueryResponse>, AppError> {
    info!("Query received: {}", query_preview(&req.query));

    let response =
        services::query::process(state.llm.as_ref(), state.compute.as_ref(), &req.query).await;

    Ok(Json(StudentQueryResponse { response }))
}
