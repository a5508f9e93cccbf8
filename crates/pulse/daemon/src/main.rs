//! Pulse daemon - streaming metric analytics service
//!
//! pulsed provides:
//! - Metric ingestion over HTTP with bounded background processing
//! - Rolling-average prediction and z-score anomaly detection
//! - TTL persistence of raw metric records
//! - Prometheus metrics for external scraping

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod pipeline;
mod server;
mod store;

use config::DaemonConfig;
use error::DaemonResult;
use server::Server;

/// Pulse daemon CLI
#[derive(Parser)]
#[command(name = "pulsed")]
#[command(about = "Pulse daemon - streaming metric analytics service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PULSE_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides configuration)
    #[arg(short, long, env = "PULSE_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level (overrides configuration)
    #[arg(long, env = "PULSE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "PULSE_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| error::DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| error::DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json {
        config.logging.json = true;
    }

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    println!(
        r#"
  ____        _
 |  _ \ _   _| |___  ___
 | |_) | | | | / __|/ _ \
 |  __/| |_| | \__ \  __/
 |_|    \__,_|_|___/\___|

  Pulse - streaming metric analytics
  Version: {}
  Window: {} samples, threshold: {} sigma
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.engine.window_size,
        config.engine.z_threshold,
        config.server.listen_addr
    );

    // Create and run server
    Server::new(config)?.run().await
}
