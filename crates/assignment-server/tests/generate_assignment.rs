use std::sync::Arc;

use assignment_server::{build_app, ServerState};
use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tutor_core::{BackendError, TextCompletion};

/// Fake language model returning a canned reply or a canned failure.
struct FakeLlm {
    reply: Result<&'static str, &'static str>,
}

#[async_trait]
impl TextCompletion for FakeLlm {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn complete(
        &self,
        _system_prompt: Option<&str>,
        _user_input: &str,
    ) -> Result<String, BackendError> {
        match self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(msg) => Err(BackendError::Parse(msg.to_string())),
        }
    }
}

fn test_app(reply: Result<&'static str, &'static str>) -> Router {
    build_app(Arc::new(ServerState {
        llm: Arc::new(FakeLlm { reply }),
    }))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn returns_renumbered_questions() {
    let app = test_app(Ok("1. Q1\n2. Q2\nNote: ignore this\n3. Q3"));

    let request = post_json(
        "/generate-assignment",
        json!({"subject": "Math", "topic": "Algebra"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["subject"], "Math");
    assert_eq!(body["topic"], "Algebra");
    assert_eq!(body["questions"], json!(["1. Q1", "2. Q2", "3. Q3"]));
}

#[tokio::test]
async fn empty_subject_is_rejected() {
    let app = test_app(Ok("1. unused"));

    let request = post_json(
        "/generate-assignment",
        json!({"subject": "", "topic": "Algebra"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Both 'subject' and 'topic' fields are required."
    );
}

#[tokio::test]
async fn whitespace_topic_is_rejected() {
    let app = test_app(Ok("1. unused"));

    let request = post_json(
        "/generate-assignment",
        json!({"subject": "Math", "topic": "   "}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn backend_failure_yields_empty_question_list() {
    let app = test_app(Err("model unavailable"));

    let request = post_json(
        "/generate-assignment",
        json!({"subject": "Math", "topic": "Algebra"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["questions"], json!([]));
}

#[tokio::test]
async fn welcome_route_responds() {
    let app = test_app(Ok(""));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Welcome to the assignment service!");
}
