//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `InvalidPath`, `InvalidBounds` → 400
//! - `NotFound`, `AlreadyExists`, `NotEmpty`, `CreateFailed`, `RenameFailed` → 403
//! - `UploadConflict` → 409 (plain-text `"error"` body, not JSON)
//! - `Io`, `Image`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid crop bounds: {0}")]
    InvalidBounds(String),

    #[error("Does not exist: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Directory is not empty: {0}")]
    NotEmpty(String),

    #[error("Directory has not been added: {0}")]
    CreateFailed(String),

    #[error("Could not change directory name: {0}")]
    RenameFailed(String),

    #[error("At least one file already exists in the target directory")]
    UploadConflict,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPath(_) | AppError::InvalidBounds(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_)
            | AppError::AlreadyExists(_)
            | AppError::NotEmpty(_)
            | AppError::CreateFailed(_)
            | AppError::RenameFailed(_) => StatusCode::FORBIDDEN,
            // Upload conflicts keep the original wire contract: a bare
            // text body instead of JSON.
            AppError::UploadConflict => {
                return (StatusCode::CONFLICT, "error").into_response();
            }
            AppError::Io(_) | AppError::Image(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "msg": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
