use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Invalid MSISDN format")]
    InvalidAddress,
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::InvalidSignature => {
                tracing::debug!("Signature verification failed");
                (StatusCode::UNAUTHORIZED, "invalid signature".to_string())
            }
            Self::InvalidAddress => {
                tracing::debug!("MSISDN validation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, "Invalid MSISDN format".to_string())
            }
            Self::Validation(msg) => {
                tracing::debug!(message = %msg, "Validation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
