//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

/// Request body with the student's question.
#[derive(Debug, Deserialize)]
pub struct StudentQueryRequest {
    pub query: String,
}

/// Response body with the backend's textual answer.
#[derive(Debug, Serialize)]
pub struct StudentQueryResponse {
    pub response: String,
}

/// Response for the welcome route.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}
