//! Response types for the Compensation Engine API.
//!
//! This module defines the error response structures and how calculation
//! errors map onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::CalculationError;
use crate::error::EngineError;

/// API error body: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates a new API error body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(message),
        }
    }

    /// Creates a 400 response listing missing fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::bad_request(format!("Missing required fields: {}", fields.join(", ")))
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.error.error
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalculationError> for ApiErrorResponse {
    fn from(error: CalculationError) -> Self {
        let status = if error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            error: ApiError::new(error.to_string()),
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        CalculationError::from(error).into()
    }
}
