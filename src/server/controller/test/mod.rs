use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Builds the full application over a fresh in-memory database.
async fn setup() -> Router {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.unwrap();

    router::build(AppState::new(db))
}

/// Sends a request through the application and returns status and raw body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

/// Sends a request and deserializes the JSON response body.
async fn send_json<T: DeserializeOwned>(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, T) {
    let (status, bytes) = send(app, method, uri, body).await;

    (status, serde_json::from_slice(&bytes).unwrap())
}
