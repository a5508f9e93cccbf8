//! Metrics exporter for Prometheus scraping

use prometheus::{Encoder, Registry, TextEncoder};

/// Export the registry in Prometheus text exposition format.
///
/// Encoding only fails on malformed metric descriptors, which registration
/// already rules out; an error here would be a programming bug.
pub fn export_metrics(registry: &Registry) -> Result<String, prometheus::Error> {
    let mut output = String::new();
    TextEncoder::new().encode_utf8(&registry.gather(), &mut output)?;
    Ok(output)
}

/// HTTP handler for metrics endpoint (requires "http" feature)
#[cfg(feature = "http")]
pub mod http {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use prometheus::Registry;
    use std::sync::Arc;

    /// Metrics endpoint state
    #[derive(Clone)]
    pub struct MetricsState {
        pub registry: Arc<Registry>,
    }

    impl MetricsState {
        pub fn new(registry: Arc<Registry>) -> Self {
            Self { registry }
        }
    }

    /// Handler for the Prometheus scrape endpoint
    pub async fn metrics_handler(State(state): State<MetricsState>) -> Response {
        match super::export_metrics(&state.registry) {
            Ok(body) => (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("metrics encoding failed: {err}"),
            )
                .into_response(),
        }
    }

    /// Create an axum router serving the scrape endpoint at `path`
    pub fn metrics_router(path: &str, registry: Arc<Registry>) -> axum::Router {
        use axum::routing::get;

        axum::Router::new()
            .route(path, get(metrics_handler))
            .with_state(MetricsState::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ServiceMetrics;

    #[test]
    fn export_contains_registered_families() {
        let registry = Registry::new();
        let metrics = ServiceMetrics::new(&registry);
        metrics.ingest.record_accepted();
        metrics.engine.anomalies_total.inc();

        let output = export_metrics(&registry).unwrap();
        assert!(output.contains("pulse_ingest_total"));
        assert!(output.contains("pulse_anomalies_total"));
        assert!(output.contains("pulse_anomaly_rate"));
        assert!(output.contains("pulse_prediction_value"));
    }
}

#[cfg(all(test, feature = "http"))]
mod http_tests {
    use super::http::{metrics_handler, MetricsState};
    use crate::metrics::ServiceMetrics;
    use axum::extract::State;
    use axum::http::StatusCode;
    use prometheus::Registry;
    use std::sync::Arc;

    #[tokio::test]
    async fn handler_serves_text_exposition() {
        let registry = Arc::new(Registry::new());
        let metrics = ServiceMetrics::new(&registry);
        metrics.ingest.record_accepted();

        let response = metrics_handler(State(MetricsState::new(registry))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
