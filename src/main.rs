//! Payroll Calculation Engine server
//!
//! Serves the payroll calculation API over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

/// Payroll Calculation Engine - REST API for payroll runs
#[derive(Parser, Debug)]
#[command(name = "payroll-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration directory holding payroll.yaml and holidays/
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "PAYROLL_CONFIG_DIR",
        default_value = "config/default"
    )]
    config: PathBuf,

    /// Host address to bind to
    #[arg(long, env = "PAYROLL_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PAYROLL_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "PAYROLL_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    tracing::info!("Payroll Calculation Engine v{}", env!("CARGO_PKG_VERSION"));

    let loader = ConfigLoader::load(&args.config).with_context(|| {
        format!("failed to load configuration from {}", args.config.display())
    })?;
    tracing::info!(
        config_dir = %args.config.display(),
        holidays = loader.holidays().len(),
        flat_tax_rate = %loader.config().tax.flat_rate,
        "Payroll configuration loaded"
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Starting server");

    axum::serve(listener, create_router(AppState::new(loader)))
        .await
        .context("server error")?;

    Ok(())
}
