//! Configuration for pulse-daemon

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Analytics engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Metric store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Ingestion pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".parse().unwrap(),
            enable_cors: true,
        }
    }
}

/// Analytics engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sliding window capacity in samples
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Z-score threshold beyond which a sample is anomalous
    #[serde(default = "default_z_threshold")]
    pub z_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            z_threshold: default_z_threshold(),
        }
    }
}

/// Metric store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Record time-to-live in seconds
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Interval between expired-record sweeps in seconds
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// Ingestion pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Bounded queue capacity; submissions beyond this are rejected
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Number of worker tasks draining the queue
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            workers: default_workers(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_window_size() -> usize {
    50
}

fn default_z_threshold() -> f64 {
    2.0
}

fn default_ttl() -> u64 {
    600
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_queue_capacity() -> usize {
    1024
}

fn default_workers() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration from defaults, an optional file, and `PULSE_*`
    /// environment variables, in increasing precedence.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PULSE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.server.listen_addr.port(), 8080);
        assert_eq!(config.engine.window_size, 50);
        assert_eq!(config.engine.z_threshold, 2.0);
        assert_eq!(config.store.ttl_secs, 600);
        assert_eq!(config.pipeline.queue_capacity, 1024);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = DaemonConfig::load(None).unwrap();
        assert_eq!(config.engine.window_size, 50);
        assert_eq!(config.pipeline.workers, 4);
        assert!(config.server.enable_cors);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("PULSE__ENGINE__WINDOW_SIZE", "10");
        let config = DaemonConfig::load(None).unwrap();
        std::env::remove_var("PULSE__ENGINE__WINDOW_SIZE");
        assert_eq!(config.engine.window_size, 10);
    }
}
