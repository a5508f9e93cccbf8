//! API Router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use pulse_observability::metrics_router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let scrape = metrics_router("/metrics/prometheus", state.registry.clone());

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", post(handlers::ingest_metric))
        .route("/analyze", get(handlers::get_analytics))
        .with_state(state)
        .merge(scrape)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
