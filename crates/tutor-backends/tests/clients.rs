use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tutor_backends::{GeminiClient, WolframClient};
use tutor_core::{BackendError, ComputeEngine, TextCompletion};

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn mock_gemini() -> &'static str {
    r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Paris"}]}}]}"#
}

#[tokio::test]
async fn gemini_client_extracts_candidate_text() {
    let app = Router::new().route(
        "/models/{model}",
        post(mock_gemini),
    );
    let base = spawn_server(app).await;

    let client = GeminiClient::with_api_base("test-key", "gemini-1.5-flash", &base);
    let answer = client
        .complete(None, "What is the capital of France?")
        .await
        .unwrap();

    assert_eq!(answer, "Paris");
}

#[tokio::test]
async fn gemini_client_reports_http_failure() {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async { (StatusCode::FORBIDDEN, "API key not valid") }),
    );
    let base = spawn_server(app).await;

    let client = GeminiClient::with_api_base("bad-key", "gemini-1.5-flash", &base);
    let err = client.complete(None, "hello").await.unwrap_err();

    match err {
        BackendError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "API key not valid");
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn wolfram_client_returns_trimmed_answer() {
    let app = Router::new().route("/result", get(|| async { "15\n" }));
    let base = spawn_server(app).await;

    let client = WolframClient::with_api_base("test-appid", &base);
    let answer = client.compute("5 * 3").await.unwrap();

    assert_eq!(answer, "15");
}

#[tokio::test]
async fn wolfram_client_reports_unintelligible_input() {
    let app = Router::new().route(
        "/result",
        get(|| async {
            (
                StatusCode::NOT_IMPLEMENTED,
                "Wolfram|Alpha did not understand your input",
            )
        }),
    );
    let base = spawn_server(app).await;

    let client = WolframClient::with_api_base("test-appid", &base);
    let err = client.compute("asdfghjkl").await.unwrap_err();

    assert!(matches!(err, BackendError::Status { status: 501, .. }));
}
