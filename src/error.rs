//! Unified error types for the service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while starting or running the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by request handlers, each mapped to an HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No route matched the request path.
    #[error("route not found")]
    NotFound,

    /// Unexpected failure while handling the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short, stable error label.
    pub error: &'static str,
    /// Detail, omitted when there is nothing useful to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::InvalidJson(e) => ErrorBody {
                error: "Invalid JSON",
                message: Some(e.to_string()),
            },
            Self::NotFound => ErrorBody {
                error: "Route not found",
                message: None,
            },
            Self::Internal(message) => ErrorBody {
                error: "Something went wrong!",
                message: Some(message),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
