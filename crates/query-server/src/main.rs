//! HTTP server entry point for the query service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use query_server::{build_app, ServerState};
use tutor_backends::{GeminiClient, WolframClient};
use tutor_config::QueryConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = QueryConfig::from_env()?;
    info!("Using model {}", config.gemini_model);

    let llm = GeminiClient::new(&config.google_api_key, &config.gemini_model);
    let compute = WolframClient::new(&config.wolfram_app_id);
    let state = Arc::new(ServerState {
        llm: Arc::new(llm),
        compute: Arc::new(compute),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = build_app(state).layer(trace_layer).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting query server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
