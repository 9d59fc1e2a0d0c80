//! Test harness driving the router with `oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use budget_mgt_api::{AppState, BASE_PATH, create_router};
use budget_mgt_db::MemoryStore;
use budget_mgt_shared::{AuthConfig, PaginationConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const USERNAME: &str = "budget";
pub const PASSWORD: &str = "secret";

pub fn app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        AuthConfig {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        },
        PaginationConfig::default(),
    );
    create_router(state)
}

pub fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Status, headers and decoded JSON body (`Null` when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> TestResponse {
    send_with_auth(app, method, path, body, Some(basic(USERNAME, PASSWORD))).await
}

pub async fn send_with_auth(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
    authorization: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{BASE_PATH}{path}"));
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn create_budget(app: &Router, family_id: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/budgets",
        Some(serde_json::json!({ "familyId": family_id })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body
}
