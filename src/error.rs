use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repo::StoreError;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid request body")]
    Validation(FieldErrors),

    #[error("Could not save to database")]
    Storage(#[from] StoreError),

    #[error("Not Found")]
    NotFound,

    #[error("Internal Server Error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidJson(e) => {
                tracing::warn!("Invalid JSON payload: {}", e);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() })))
                    .into_response()
            }
            AppError::Validation(details) => {
                tracing::warn!("Validation failed: {:?}", details);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": self.to_string(), "details": details })),
                )
                    .into_response()
            }
            AppError::Storage(e) => {
                tracing::error!("Store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() })))
                    .into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
