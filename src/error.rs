//! Application error type and its HTTP mapping.
//!
//! All API failures serialize as `{ "success": false, "error": "..." }`;
//! structured details stay server-side in the logs. The browser-facing
//! redirect endpoint renders HTML error pages instead (see
//! `api::handlers::redirect`).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Request-scoped application errors.
#[derive(Debug)]
pub enum AppError {
    /// Input failed validation (malformed URL, bad payload). HTTP 400.
    Validation { message: String, details: Value },
    /// No record matches the requested short code. HTTP 404.
    NotFound { message: String, details: Value },
    /// Short-code allocation collided on every attempt. HTTP 500, retryable.
    CodeExhausted { attempts: usize },
    /// Backing store unavailable or inconsistent. HTTP 500.
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn code_exhausted(attempts: usize) -> Self {
        Self::CodeExhausted { attempts }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Storage { message, .. } => f.write_str(message),
            AppError::CodeExhausted { attempts } => {
                write!(f, "Failed to allocate a unique code after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::NotFound { message, details } => (StatusCode::NOT_FOUND, message, details),
            AppError::CodeExhausted { attempts } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to allocate a unique code, please retry".to_string(),
                json!({ "attempts": attempts }),
            ),
            AppError::Storage { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        if status.is_server_error() {
            tracing::error!(%status, %details, "request failed: {message}");
        } else {
            tracing::debug!(%status, %details, "request rejected: {message}");
        }

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Invalid request payload", json!(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = AppError::bad_request("Invalid URL", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Invalid URL"));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::not_found("Short link not found", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_code_exhausted_maps_to_500() {
        let response = AppError::code_exhausted(10).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_carries_message() {
        let err = AppError::bad_request("Invalid URL format", json!({}));
        assert!(err.to_string().contains("Invalid URL format"));

        let err = AppError::code_exhausted(10);
        assert!(err.to_string().contains("10 attempts"));
    }
}
