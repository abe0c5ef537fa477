//! Tests for HTTP controller endpoints.
//!
//! Requests are sent through the full router so extraction, status mapping and JSON bodies
//! are exercised the same way a client sees them.

mod auth;
mod eth;
mod user;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use txfetch::server::{model::app::AppState, router};
use txfetch_test_utils::prelude::*;

/// Builds the application router backed by the setup's database and mock node.
fn app(test: &TestSetup) -> Router {
    router::routes().with_state(test.state::<AppState>())
}

/// Sends a request and returns the status with the JSON body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header("AUTH_TOKEN", token)
        .body(Body::empty())
        .unwrap()
}

/// Hashes of the transactions in a list response, in response order.
fn response_hashes(body: &Value) -> Vec<String> {
    body["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["transactionHash"].as_str().unwrap().to_string())
        .collect()
}

/// Inserts a user whose password equals the username.
async fn insert_user(test: &mut TestSetup, username: &str) -> Result<i32, TestError> {
    let hash = bcrypt::hash(username, 4).unwrap();
    let user = test.user().insert_user(username, &hash).await?;

    Ok(user.id)
}
