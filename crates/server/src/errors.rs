use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Body text for every 500; the cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("route not found")]
    RouteNotFound,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Service(e) => {
                let status = match e {
                    ServiceError::InvalidId(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                    ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                    ServiceError::Internal(detail) => {
                        error!(error = %detail, "internal service error");
                        return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string());
                    }
                };
                (status, e.message().to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(MessageBody::new(message))).into_response()
    }
}

/// `CatchPanicLayer` hook: log the panic payload, answer with the generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
