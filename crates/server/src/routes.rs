use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::roles::RoleRepository;

use crate::errors::{handle_panic, ApiError};

pub mod roles;

/// Shared handler state; the store is injected, never a global.
#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<dyn RoleRepository>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}

/// Build the full application router with its middleware stack.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/roles", get(roles::list_roles).post(roles::create_role))
        .route(
            "/api/roles/:id",
            get(roles::get_role).put(roles::update_role).delete(roles::delete_role),
        )
        .route(
            "/api/roles/:id/users",
            get(roles::list_users).post(roles::add_user),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(fallback)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
