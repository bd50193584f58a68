use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use chesstrack::{app, AppState, ServerConfig};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A router over a fresh in-memory store, plus the state behind it
pub struct TestSetup {
    pub router: Router,
    pub state: AppState,
}

pub struct TestSetupBuilder {
    config: ServerConfig,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
        }
    }

    pub fn with_engine_depth(mut self, depth: u32) -> Self {
        self.config.engine_depth = depth;
        self
    }

    pub fn with_default_elo(mut self, elo: i32) -> Self {
        self.config.default_elo = elo;
        self
    }

    pub fn build(self) -> TestSetup {
        let state = AppState::in_memory(self.config);
        TestSetup {
            router: app(state.clone()),
            state,
        }
    }
}

impl TestSetup {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }
}
