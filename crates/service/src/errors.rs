use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Client-facing text without the variant prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidId(m) | Self::NotFound(m) | Self::Validation(m) | Self::Internal(m) => m,
        }
    }
}
