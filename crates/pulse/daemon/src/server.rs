//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::pipeline;
use crate::store::{InMemoryStore, MetricStore};
use prometheus::Registry;
use pulse_engine::AnalyticsEngine;
use pulse_observability::ServiceMetrics;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Pulse daemon server
pub struct Server {
    config: DaemonConfig,
    engine: Arc<AnalyticsEngine>,
    store: Arc<dyn MetricStore>,
    registry: Arc<Registry>,
    metrics: Arc<ServiceMetrics>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        if config.engine.window_size == 0 {
            return Err(DaemonError::Config(
                "engine.window_size must be at least 1".to_string(),
            ));
        }

        let engine = Arc::new(AnalyticsEngine::new(
            config.engine.window_size,
            config.engine.z_threshold,
        ));
        let store: Arc<dyn MetricStore> = Arc::new(InMemoryStore::new(Duration::from_secs(
            config.store.ttl_secs,
        )));
        let registry = Arc::new(Registry::new());
        let metrics = Arc::new(ServiceMetrics::new(&registry));

        Ok(Self {
            config,
            engine,
            store,
            registry,
            metrics,
        })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let handle = pipeline::spawn(
            &self.config.pipeline,
            self.engine.clone(),
            self.store.clone(),
            self.metrics.clone(),
        );

        self.spawn_sweeper();

        let state = AppState::new(
            self.engine.clone(),
            self.store.clone(),
            handle,
            self.metrics.clone(),
            self.registry.clone(),
        );
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, window_size = self.config.engine.window_size, "pulse daemon listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("pulse daemon shutting down");
        Ok(())
    }

    /// Periodically purge expired records and refresh the store gauge
    fn spawn_sweeper(&self) {
        let store = self.store.clone();
        let metrics = self.metrics.clone();
        let period = Duration::from_secs(self.config.store.sweep_interval_secs.max(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await; // first tick fires immediately
            loop {
                ticker.tick().await;
                match store.purge_expired().await {
                    Ok(purged) => {
                        if purged > 0 {
                            tracing::debug!(purged, "swept expired metric records");
                        }
                        if let Ok(len) = store.len().await {
                            metrics.store.set_entries(len as i64);
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "metric store sweep failed"),
                }
            }
        });
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
