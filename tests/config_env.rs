//! Loads configuration from the real process environment.
//!
//! Kept in its own test binary with a single test so no other test observes
//! the mutated environment.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use python_app::api::{create_router, AppState};
use python_app::config::Config;

async fn environment_field(config: &Config, uri: &str) -> Value {
    let response = create_router(AppState::from_config(config))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["environment"].clone()
}

#[tokio::test]
async fn load_reads_environment_and_port_from_process() {
    std::env::remove_var("ENVIRONMENT");
    std::env::remove_var("PORT");

    let config = Config::load().unwrap();
    assert_eq!(config.environment, "development");
    assert_eq!(config.port, 5000);
    assert_eq!(environment_field(&config, "/").await, "development");

    std::env::set_var("ENVIRONMENT", "production");
    std::env::set_var("PORT", "8081");

    let config = Config::load().unwrap();
    assert_eq!(config.environment, "production");
    assert_eq!(config.port, 8081);
    assert!(!config.is_debug());
    assert_eq!(environment_field(&config, "/").await, "production");
    assert_eq!(environment_field(&config, "/api/status").await, "production");
}
