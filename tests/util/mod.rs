//! Helpers for driving the full application router in tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use holocron::server::{model::app::AppState, startup::build_app};
use holocron_test_utils::TestSetup;
use serde_json::Value;
use tower::ServiceExt;

/// Sends a request through the application and returns the status with the parsed JSON body
///
/// A `null` body is returned when the response is not JSON.
pub async fn send(
    test: &TestSetup,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_app(test.state::<AppState>());

    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
