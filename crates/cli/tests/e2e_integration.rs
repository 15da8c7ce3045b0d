//! End-to-end integration tests: full pipeline from message to reply
//! plus trace, and a gateway round-trip over the JSON contract.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use toolpilot_agent::{Agent, run_agent};
use toolpilot_gateway::{GatewayState, build_router};

#[test]
fn calculator_end_to_end() {
    let result = run_agent("what is 2+2");
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].output, "4");
    assert!(result.reply.contains('4'));
}

#[test]
fn every_matched_tool_failing_still_yields_a_reply() {
    // Both matched tools fail: division by zero and an unknown city.
    let result = run_agent("what is 12/0 and the weather in Atlantis?");
    assert_eq!(result.steps.len(), 2);
    assert!(result.steps[0].output.contains("divide by zero"));
    assert!(result.steps[1].output.contains("Atlantis"));
    assert!(!result.reply.is_empty());
}

#[test]
fn four_tools_in_priority_order() {
    let result =
        run_agent("brainstorm a rust launch, check the weather in Tokyo, and compute (2+3)*4");
    let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Calculator", "Weather desk", "Knowledge base", "Idea sparks"]
    );
    assert!(result.reply.contains("20"));
    assert!(result.reply.contains("Tokyo"));
}

#[test]
fn repeated_calls_are_identical_modulo_ids() {
    let m = "forecast for Berlin and 7*6, then plan a bakery";
    let a = run_agent(m);
    let b = run_agent(m);
    assert_eq!(a.reply, b.reply);
    let strip = |r: &toolpilot_core::step::AgentResult| {
        r.steps
            .iter()
            .map(|s| {
                (
                    s.title.clone(),
                    s.reasoning.clone(),
                    s.input.clone(),
                    s.output.clone(),
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(strip(&a), strip(&b));
}

#[test]
fn greeting_skips_all_tools() {
    let result = run_agent("good morning!");
    assert!(result.steps.is_empty());
    assert!(!result.reply.is_empty());
}

#[tokio::test]
async fn gateway_round_trip() {
    let state = Arc::new(GatewayState {
        agent: Agent::default(),
    });
    let app = build_router(state, 64 * 1024);

    let req = Request::builder()
        .method("POST")
        .uri("/api/agent")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"message": "weather in London and what is 2+2"}"#,
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["title"], "Calculator");
    assert_eq!(steps[1]["title"], "Weather desk");
    // Ids are unique within the result.
    assert_ne!(steps[0]["id"], steps[1]["id"]);
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.contains('4'));
    assert!(reply.contains("London"));
}
