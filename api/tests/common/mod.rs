use std::{sync::Arc, time::Duration};

use axum_test::TestServer;
use clap::Parser;
use mockito::{Mock, ServerGuard};
use nutripilot_api::{
    application::http::{
        server::http_server::{router, state},
        session::views::SessionView,
    },
    args::Args,
};
use nutripilot_core::domain::session::entities::SessionStatus;
use serde_json::{Value, json};

pub const GENERATE_PATH: &str = "/models/gemini-flash-latest:generateContent";

pub fn spawn_app(gemini: &ServerGuard) -> TestServer {
    let args = Args::try_parse_from([
        "nutripilot",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        &gemini.url(),
    ])
    .expect("args should parse");

    let app_state = state(Arc::new(args)).expect("state should build");
    let app = router(app_state).expect("router should build");

    TestServer::new(app).expect("test server should start")
}

pub fn soda_result() -> Value {
    json!({
        "intent": "Decide whether this soda fits a low-sugar diet",
        "summary": "Mostly sugar water with additives.",
        "verdict": "Avoid",
        "healthScore": 15,
        "processingLevel": "Ultra-Processed",
        "keyInsights": [
            { "type": "negative", "text": "High fructose corn syrup is the second ingredient" },
            { "type": "neutral", "text": "Caffeine content is moderate" }
        ],
        "tradeOffs": "Refreshing but offers no nutritional value.",
        "uncertainty": "Exact sugar amount is not listed."
    })
}

/// Wraps an analysis payload the way `generateContent` returns it.
pub fn gemini_body(result: &Value) -> String {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": result.to_string() }]
            },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

pub async fn mock_gemini_success(gemini: &mut ServerGuard) -> Mock {
    gemini
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(&soda_result()))
        .create_async()
        .await
}

pub async fn create_session(server: &TestServer) -> SessionView {
    let response = server.post("/sessions").await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<SessionView>()
}

/// Polls the session until it leaves `analyzing`.
pub async fn wait_for_outcome(server: &TestServer, session: &SessionView) -> SessionView {
    for _ in 0..200 {
        let view = server
            .get(&format!("/sessions/{}", session.id))
            .await
            .json::<SessionView>();

        if view.status != SessionStatus::Analyzing {
            return view;
        }

        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    panic!("session {} never left analyzing", session.id);
}
