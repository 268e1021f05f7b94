use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::roles::{parse_id, Role, User, UserInput};

use crate::errors::ApiError;
use crate::extract::RoleBody;
use crate::routes::AppState;

pub async fn list_roles(State(state): State<AppState>) -> Json<Vec<Role>> {
    Json(state.roles.list().await)
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Role>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.roles.get(id).await?))
}

pub async fn create_role(
    State(state): State<AppState>,
    RoleBody(input): RoleBody,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    let role = state.roles.create(input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// A bad body outranks a bad id; the store validates before its lookup.
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RoleBody(input): RoleBody,
) -> Result<Json<Role>, ApiError> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => {
            input.validate()?;
            return Err(e.into());
        }
    };
    Ok(Json(state.roles.update(id, input).await?))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.roles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_users(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.roles.list_users(id).await?))
}

/// The body is optional; anything unreadable counts as `{}`.
pub async fn add_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<UserInput>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = parse_id(&id)?;
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    let user = state.roles.add_user(id, input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
