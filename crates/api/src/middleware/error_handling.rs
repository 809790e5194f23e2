//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use placement_core::errors::PlacementError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a `PlacementError` and implements `IntoResponse`, so
/// handlers can return `Result<_, AppError>` and use `?` on store calls.
#[derive(Debug)]
pub struct AppError(pub PlacementError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PlacementError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            PlacementError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacementError::Validation(_) => StatusCode::BAD_REQUEST,
            PlacementError::Conflict(_) => StatusCode::CONFLICT,
            PlacementError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(error = ?self.0, "Request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on functions returning `PlacementResult<T>` inside handlers.
impl From<PlacementError> for AppError {
    fn from(err: PlacementError) -> Self {
        AppError(err)
    }
}

impl From<placement_core::slots::InvalidRangeError> for AppError {
    fn from(err: placement_core::slots::InvalidRangeError) -> Self {
        AppError(PlacementError::InvalidRange(err))
    }
}

/// Malformed or mistyped request bodies are a validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(PlacementError::Validation(rejection.body_text()))
    }
}

/// JSON body extractor whose rejections use the same error body as handlers.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Maps a PlacementError to an HTTP response
pub fn map_error(err: PlacementError) -> Response {
    AppError(err).into_response()
}
