use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use service::roles::RoleInput;

use crate::errors::ApiError;

/// Role create/update body.
///
/// A request with no body, or one not declared as JSON, reads as `{}` so that
/// the required-field check answers it. Malformed JSON is still a 400 carrying
/// the decoder's text.
#[derive(Debug)]
pub struct RoleBody(pub RoleInput);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

#[async_trait]
impl<S> FromRequest<S> for RoleBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        if !json || bytes.is_empty() {
            return Ok(Self(RoleInput::default()));
        }
        let Json(input) = Json::<RoleInput>::from_bytes(&bytes)?;
        Ok(Self(input))
    }
}
