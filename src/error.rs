use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ShopError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(&'static str),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Unique-constraint violation on `users.username`.
    #[error("Username already exists")]
    DuplicateKey,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl ShopError {
    pub fn status(&self) -> StatusCode {
        match self {
            ShopError::Validation(_) | ShopError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ShopError::Unauthorized | ShopError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ShopError::DuplicateKey => StatusCode::CONFLICT,
            ShopError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ShopError::Database(e) => {
                tracing::error!(error = %e, "storage operation failed");
                "Internal server error".to_string()
            }
            ShopError::MalformedBody(detail) => {
                tracing::debug!(%detail, "rejected request body");
                "Malformed JSON body".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

/// `{"error": "..."}`
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
