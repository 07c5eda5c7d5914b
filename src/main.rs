//! python-app HTTP service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use python_app::api::{create_router, AppState};
use python_app::config::Config;
use python_app::error::{AppError, Result};
use python_app::utils::shutdown_signal;

/// Minimal JSON HTTP service.
#[derive(Parser, Debug)]
#[command(name = "python-app")]
#[command(about = "Serves home, health, data and status JSON endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging regardless of ENVIRONMENT.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP listen port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Load and print the effective configuration.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Configuration drives the log filter, so load it before logging is up.
    let mut config = Config::load().map_err(AppError::from)?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    let filter = if args.verbose || config.is_debug() {
        EnvFilter::new("python_app=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await?,
    }

    Ok(())
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config) {
    println!("Environment: {}", config.environment);
    println!("Port:        {}", config.port);
    println!("Debug mode:  {}", config.is_debug());
    println!("Log filter:  {}", config.rust_log);
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> Result<()> {
    let state = AppState::from_config(&config);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("python-app listening on {}", addr);
    info!("Environment: {}", config.environment);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
