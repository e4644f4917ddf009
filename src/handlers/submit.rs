use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{CommentRecord, SubmitResponse};
use crate::repo::StoreError;
use crate::state::AppState;
use crate::validation::validate_submission;

/// Accept a comment and store it under its username
pub async fn submit_comment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>> {
    tracing::info!("POST /test - Received request");

    let payload: Value = serde_json::from_slice(&body).map_err(AppError::InvalidJson)?;
    tracing::debug!("Request JSON payload: {}", payload);

    let input = validate_submission(&payload).map_err(AppError::Validation)?;
    tracing::info!("Validation succeeded for user: {}", input.username());

    let record = CommentRecord::from_submission(&input);
    tracing::debug!("Saving item to store: {:?}", record);

    tokio::time::timeout(state.store_timeout, state.comments.put(&record))
        .await
        .map_err(|_| StoreError::Timeout(state.store_timeout))??;
    tracing::info!("Successfully saved item for user: {}", record.userid);

    Ok(Json(input.into()))
}

/// Answer the browser's pre-flight check without touching the store
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ],
    )
}
