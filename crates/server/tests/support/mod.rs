#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use service::roles::{InMemoryRoleStore, RoleRepository};
use tower::ServiceExt;

/// Router over a fresh seeded store; no socket is opened.
pub fn seeded_app() -> Router {
    app_with(Arc::new(InMemoryRoleStore::seeded()))
}

pub fn app_with(repo: Arc<dyn RoleRepository>) -> Router {
    server::build_app(repo)
}

/// Send one request, return the status and the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    match body {
        Some(json) => send_raw(app, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

/// Like `send`, but with a verbatim body and an optional content type.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder.body(body.into()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, None).await
}
