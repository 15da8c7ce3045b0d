//! HTTP API gateway for Toolpilot.
//!
//! Thin plumbing over the in-process agent contract: it validates the
//! request body, hands the trimmed message to the orchestrator, and
//! serializes the `AgentResult` back as JSON. All decision logic lives
//! in `toolpilot-agent`; the gateway never inspects tool outputs.
//!
//! Built on Axum with CORS, HTTP trace logging, and a body size limit.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use toolpilot_agent::Agent;
use toolpilot_core::step::AgentResult;

/// Shared application state: one stateless agent reused across
/// requests. The agent holds only read-only curated tables, so no
/// locking is needed.
pub struct GatewayState {
    pub agent: Agent,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes and layers.
pub fn build_router(state: SharedState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/agent", post(agent_handler).get(agent_usage_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(config: toolpilot_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let state = Arc::new(GatewayState {
        agent: Agent::default(),
    });
    let app = build_router(state, config.gateway.max_body_bytes);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Deserialize)]
struct AgentRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

async fn agent_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AgentRequest>,
) -> Result<Json<AgentResult>, (StatusCode, Json<ErrorResponse>)> {
    // The core assumes a valid, non-empty message; empty input is this
    // layer's responsibility to reject.
    let message = payload.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Message is required.",
            }),
        ));
    }

    info!(message_len = message.len(), "Agent request received");
    Ok(Json(state.agent.run(message)))
}

#[derive(Serialize)]
struct UsageResponse {
    message: &'static str,
}

async fn agent_usage_handler() -> Json<UsageResponse> {
    Json(UsageResponse {
        message:
            "POST a JSON body with a `message` field to receive a tool-augmented response.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = Arc::new(GatewayState {
            agent: Agent::default(),
        });
        build_router(state, 64 * 1024)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/agent")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_router();
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn agent_endpoint_returns_reply_and_steps() {
        let app = test_router();
        let response = app
            .oneshot(post_json(r#"{"message": "what is 2+2"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["reply"].as_str().unwrap().contains('4'));
        assert_eq!(json["steps"][0]["output"], "4");
        assert_eq!(json["steps"][0]["title"], "Calculator");
    }

    #[tokio::test]
    async fn missing_message_rejected() {
        let app = test_router();
        let response = app.oneshot(post_json(r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Message is required.");
    }

    #[tokio::test]
    async fn whitespace_message_rejected() {
        let app = test_router();
        let response = app
            .oneshot(post_json(r#"{"message": "   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_rejected() {
        let app = test_router();
        let response = app.oneshot(post_json("{not json")).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn usage_hint_on_get() {
        let app = test_router();
        let req = Request::builder()
            .uri("/api/agent")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("POST"));
    }

    #[tokio::test]
    async fn fallback_reply_has_no_steps() {
        let app = test_router();
        let response = app
            .oneshot(post_json(r#"{"message": "hello"}"#))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["steps"].as_array().unwrap().is_empty());
        assert!(!json["reply"].as_str().unwrap().is_empty());
    }
}
