//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

/// Request body for assignment generation.
#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    pub subject: String,
    pub topic: String,
}

/// Response body with the generated question list.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub subject: String,
    pub topic: String,
    pub questions: Vec<String>,
}

/// Response for the welcome route.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}
