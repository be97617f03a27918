//! Client for the Generative Language API (Gemini).
//!
//! Uses the non-streaming `generateContent` endpoint and extracts the text
//! of the first candidate's first part.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tutor_core::{BackendError, TextCompletion};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

fn user_content(text: &str) -> Content {
    Content {
        role: Some("user".to_string()),
        parts: vec![Part { text: text.to_string() }],
    }
}

/// Pulls the text of the first candidate out of a response.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
}

/// Client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client for the given model against the public API.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_api_base(api_key, model, DEFAULT_API_BASE)
    }

    /// Creates a client against a custom API base URL (used by tests).
    pub fn with_api_base(api_key: &str, model: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_input: &str,
    ) -> Result<String, BackendError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        let request = GenerateContentRequest {
            system_instruction: system_prompt.map(|text| Content {
                role: None,
                parts: vec![Part { text: text.to_string() }],
            }),
            contents: vec![user_content(user_input)],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        debug!("Gemini returned {} candidate(s)", parsed.candidates.len());

        extract_text(parsed)
            .ok_or_else(|| BackendError::Parse("response contained no candidates".to_string()))
    }
}
