use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::pricing::{AvailabilityError, PriceError};
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Malformed request body: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) | AppError::BadRequest(msg) => {
                warn!(code = self.code(), message = %msg, "Request rejected");
            }
            AppError::NotFound(msg) => {
                debug!(message = %msg, "No route matched");
            }
        }
    }
}

impl From<PriceError> for AppError {
    fn from(e: PriceError) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl From<AvailabilityError> for AppError {
    fn from(e: AvailabilityError) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let (public_message, details) = match &self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => (msg.clone(), None),
            AppError::BadRequest(detail) => (
                "Request body could not be parsed".to_string(),
                Some(json!({ "reason": detail })),
            ),
        };

        error_response(code, public_message, details, status)
    }
}
