//! Health check endpoints for liveness and readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelHealth>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Facts about the loaded model reported by the readiness probe
#[derive(Serialize)]
pub struct ModelHealth {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

/// Returns 200 whenever the process is serving
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: None,
    };

    (StatusCode::OK, Json(response))
}

/// Returns 200 once the model is trained, 503 before
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, model) = match state.models() {
        Ok(store) => (
            HealthStatus::Healthy,
            ModelHealth {
                loaded: true,
                customers: Some(store.dataset().len()),
                clusters: Some(store.cluster_profiles().len()),
                trained_at: Some(store.trained_at()),
            },
        ),
        Err(_) => (
            HealthStatus::Unhealthy,
            ModelHealth {
                loaded: false,
                customers: None,
                clusters: None,
                trained_at: None,
            },
        ),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: Some(model),
    };

    (status_code, Json(response))
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
