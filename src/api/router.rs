use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::segmentation;
use super::state::AppState;

/// Segmentation endpoints without middleware
pub fn create_segmentation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(segmentation::root))
        .route("/cluster_info", get(segmentation::cluster_info))
        .route("/predict_cluster", post(segmentation::predict_cluster))
        .route("/data_summary", get(segmentation::data_summary))
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(create_segmentation_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        // Browser extension clients call from arbitrary origins
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
