//! HTTP route handlers for the assignment service.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{AssignmentRequest, AssignmentResponse, WelcomeResponse};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Welcome / liveness route.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the assignment service!".to_string(),
    })
}

/// Generates graded assignment questions for a subject and topic.
pub async fn generate_assignment(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<AssignmentRequest>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let subject = req.subject.trim();
    let topic = req.topic.trim();

    if subject.is_empty() || topic.is_empty() {
        return Err(AppError::BadRequest(
            "Both 'subject' and 'topic' fields are required.".to_string(),
        ));
    }

    info!("Generating assignment for {} / {}", subject, topic);
    let questions = services::assignment::generate(state.llm.as_ref(), subject, topic).await;

    Ok(Json(AssignmentResponse {
        subject: subject.to_string(),
        topic: topic.to_string(),
        questions,
    }))
}
