//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Environment tag that switches the service into debug mode.
pub const DEVELOPMENT: &str = "development";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment tag (`ENVIRONMENT`).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP listen port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log filter used outside debug mode (`RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_environment() -> String {
    DEVELOPMENT.to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            port: default_port(),
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    ///
    /// The environment tag is free-form; an empty value is passed through.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be between 1 and 65535".to_string());
        }

        Ok(())
    }

    /// Debug mode is on when running in the development environment.
    pub fn is_debug(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}
