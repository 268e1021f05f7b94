//! `ApiError` -> HTTP response mapping, plus the 500 paths: a repository
//! reporting an internal fault and a handler that panics.

mod support;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use server::errors::{ApiError, INTERNAL_ERROR_MESSAGE};
use service::errors::ServiceError;
use service::roles::{Role, RoleInput, RoleRepository, User, UserInput};

use support::{app_with, get};

async fn error_to_response(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn invalid_id_maps_to_400() {
    let (status, json) = error_to_response(ServiceError::InvalidId("Invalid role ID".into()).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"message": "Invalid role ID"}));
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = error_to_response(ServiceError::not_found("Role").into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Role not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = error_to_response(ServiceError::Validation("Name and type are required fields".into()).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Name and type are required fields");
}

#[tokio::test]
async fn internal_is_masked() {
    let (status, json) = error_to_response(ServiceError::Internal("lock poisoned at 0xdead".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"message": INTERNAL_ERROR_MESSAGE}));
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = error_to_response(ApiError::BadRequest("bad body".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad body");
}

/// Fails every call: internal errors for the fallible operations, a panic for `list`.
struct BrokenRepository;

#[async_trait]
impl RoleRepository for BrokenRepository {
    async fn list(&self) -> Vec<Role> {
        panic!("storage exploded");
    }
    async fn get(&self, _id: i64) -> Result<Role, ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
    async fn create(&self, _input: RoleInput) -> Result<Role, ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
    async fn update(&self, _id: i64, _input: RoleInput) -> Result<Role, ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
    async fn delete(&self, _id: i64) -> Result<(), ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
    async fn list_users(&self, _role_id: i64) -> Result<Vec<User>, ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
    async fn add_user(&self, _role_id: i64, _input: UserInput) -> Result<User, ServiceError> {
        Err(ServiceError::Internal("backend unavailable".into()))
    }
}

#[tokio::test]
async fn internal_fault_from_repository_is_generic_500() {
    let app = app_with(Arc::new(BrokenRepository));
    let (status, body) = get(&app, "/api/roles/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"message": "Something went wrong!"}));
}

#[tokio::test]
async fn invalid_id_is_checked_before_the_repository() {
    let app = app_with(Arc::new(BrokenRepository));
    let (status, _) = get(&app, "/api/roles/nope/users").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn handler_panic_is_caught_and_masked() {
    let app = app_with(Arc::new(BrokenRepository));
    let (status, body) = get(&app, "/api/roles").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong!");

    // the service keeps answering after a panic
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
