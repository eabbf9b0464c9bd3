//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A locally supplied hero failed a field invariant
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A query parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Id absent from the local store or the allow-list
    #[error("Not found: {0}")]
    NotFound(String),

    /// Id or name uniqueness violated in the local store
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Upstream could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status used when the error reaches the API layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::Upstream { .. }
            | GatewayError::Transport(_)
            | GatewayError::Decode(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// A hero body that is not valid JSON, or lacks a required field, fails
/// validation like any other malformed hero.
impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
