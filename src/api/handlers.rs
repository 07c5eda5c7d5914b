//! HTTP API handlers.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::ApiError;
use crate::system;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "python-app";

/// Greeting returned by the home endpoint.
pub const HOME_MESSAGE: &str = "Hello from Python Flask App!";

/// Application state shared with handlers.
///
/// Built once at startup; handlers only read from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment tag.
    pub environment: Arc<str>,
    /// Machine host name.
    pub hostname: Arc<str>,
    /// Runtime version string.
    pub runtime_version: Arc<str>,
}

impl AppState {
    /// Create state for the given environment tag, probing the host.
    pub fn new(environment: impl Into<Arc<str>>) -> Self {
        Self {
            environment: environment.into(),
            hostname: system::hostname().into(),
            runtime_version: system::runtime_version().into(),
        }
    }

    /// Create state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A single entry of the static data listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataItem {
    pub id: u32,
    pub name: &'static str,
}

/// The fixed listing returned by `GET /api/data`.
pub const DATA_ITEMS: [DataItem; 3] = [
    DataItem { id: 1, name: "Item 1" },
    DataItem { id: 2, name: "Item 2" },
    DataItem { id: 3, name: "Item 3" },
];

/// Home response.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    /// Always "running".
    pub status: &'static str,
    pub environment: Arc<str>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    pub service: &'static str,
}

/// Data listing response.
#[derive(Debug, Serialize)]
pub struct DataListResponse {
    pub data: &'static [DataItem],
}

/// Response to a successful data submission.
#[derive(Debug, Serialize)]
pub struct DataReceivedResponse {
    pub message: &'static str,
    /// The submitted payload, unchanged.
    pub data: Value,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Runtime version; the field name is kept for existing clients.
    pub python_version: Arc<str>,
    pub hostname: Arc<str>,
    pub environment: Arc<str>,
    /// Target operating system.
    pub platform: &'static str,
    /// Target CPU architecture.
    pub arch: &'static str,
}

/// Home handler.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Json(HomeResponse {
        message: HOME_MESSAGE,
        status: "running",
        environment: state.environment,
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Data listing handler.
pub async fn list_data() -> impl IntoResponse {
    Json(DataListResponse { data: &DATA_ITEMS })
}

/// Data submission handler - echoes any JSON body back with 201.
///
/// The body is parsed whatever the `Content-Type` says; malformed JSON is a 400.
pub async fn create_data(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let data: Value = serde_json::from_slice(&body)?;
    info!("Received data: {}", data);

    Ok((
        StatusCode::CREATED,
        Json(DataReceivedResponse {
            message: "Data received successfully",
            data,
        }),
    ))
}

/// Status handler - reports runtime, host and environment.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        python_version: state.runtime_version,
        hostname: state.hostname,
        environment: state.environment,
        platform: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
