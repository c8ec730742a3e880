use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure kinds surfaced by the authentication core.
///
/// Every per-request variant maps to a single HTTP status. `Internal` carries
/// store or hashing failures through unchanged so the caller can log them.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed credentials")]
    BadRequest,
    #[error("no such identifier")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("misconfiguration: {0}")]
    Fatal(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Fatal(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Lower-layer details stay in the logs, the client only gets the status.
            error!("Authentication failed with internal error: {self:#}");
        }
        status.into_response()
    }
}
