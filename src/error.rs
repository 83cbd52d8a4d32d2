use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure modes of the login flow, each mapped to one HTTP status.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found.")]
    UserNotFound,
    #[error("password incorrect")]
    PasswordIncorrect,
    #[error("jwt key not defined")]
    JwtKeyMissing,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordIncorrect => StatusCode::BAD_REQUEST,
            AuthError::JwtKeyMissing => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AuthError::Internal(e) => {
                error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
