//! Minimal JSON HTTP service.
//!
//! Serves four endpoints from a single, immutable application state:
//!
//! ```text
//! GET  /            greeting, status and environment tag
//! GET  /health      constant liveness probe
//! GET  /api/data    fixed list of three items
//! POST /api/data    echoes any JSON body back with 201
//! GET  /api/status  runtime version, host name and environment tag
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup and HTTP error types
//! - [`api`]: Router and handlers
//! - [`system`]: Host and runtime facts
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod system;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
