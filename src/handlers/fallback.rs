use std::any::Any;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::warn!("404 Not Found: {} {}", method, uri.path());
    AppError::NotFound
}

/// Turns a panic raised while serving a request into a 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Unhandled panic: {}", detail)).into_response()
}
