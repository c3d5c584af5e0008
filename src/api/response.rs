//! Response types for the report assistant API.
//!
//! This module defines the status body, the error response structures and
//! the mapping from [`AssistantError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always "running".
    pub status: String,
    /// "connected" if the store answered a department read, else "error".
    pub database: String,
    /// Number of departments in the registry (built-in list on error).
    pub department_count: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AssistantError> for ApiErrorResponse {
    fn from(error: AssistantError) -> Self {
        let message = error.to_string();
        match error {
            AssistantError::InvalidMonth { code } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MONTH",
                    message,
                    format!("Month '{code}' must be a code between 01 and 12"),
                ),
            ),
            AssistantError::InvalidRequest { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_REQUEST",
                    message,
                    format!("Check the '{field}' field of the request"),
                ),
            ),
            AssistantError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("REPORT_ERROR", message),
            },
            AssistantError::StoreUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("STORE_ERROR", message),
            },
            AssistantError::ConfigNotFound { .. } | AssistantError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
