use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preferences::PreferenceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable by retrying with corrected input. None of them
/// leave the shell's last analysis or active upload partially updated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Keyword list is empty after trimming")]
    EmptyKeywordList,

    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Preference store error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::InvalidFileType(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_FILE_TYPE",
                "Please upload a valid file type (.txt, .doc, .docx, or .pdf)".to_string(),
            ),
            AppError::MissingInput(_) => (
                StatusCode::BAD_REQUEST,
                "MISSING_INPUT",
                "Please upload a resume and enter keywords".to_string(),
            ),
            AppError::EmptyKeywordList => (
                StatusCode::BAD_REQUEST,
                "EMPTY_KEYWORD_LIST",
                "Please enter valid keywords".to_string(),
            ),
            AppError::FileRead(msg) => {
                tracing::warn!("File read error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "FILE_READ_ERROR",
                    "Error reading file. Please try again.".to_string(),
                )
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::warn!("Upload rejected: {msg}");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    "The uploaded file is too large".to_string(),
                )
            }
            AppError::Preference(e) => {
                tracing::error!("Preference store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PREFERENCE_ERROR",
                    "Could not save preference".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
