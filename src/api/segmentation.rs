//! Segmentation endpoint handlers

use axum::extract::State;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{
    cluster_info_response, ApiError, ClusterInfoResponse, DataSummaryResponse, Json,
    PredictClusterRequest, PredictClusterResponse, RootResponse,
};
use crate::domain::customer::CustomerRecord;
use crate::infrastructure::observability::record_prediction;

pub const ROOT_MESSAGE: &str = "Credit Card Clustering API is running";

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// GET /cluster_info
pub async fn cluster_info(
    State(state): State<AppState>,
) -> Result<Json<ClusterInfoResponse>, ApiError> {
    let store = state.models()?;

    Ok(Json(cluster_info_response(store.cluster_profiles())))
}

/// POST /predict_cluster
pub async fn predict_cluster(
    State(state): State<AppState>,
    Json(request): Json<PredictClusterRequest>,
) -> Result<Json<PredictClusterResponse>, ApiError> {
    let store = state.models()?;
    let record = CustomerRecord::from(request);

    let prediction = store.predict(&record).map_err(|e| {
        warn!(error = %e, "Prediction rejected");
        ApiError::from(e)
    })?;

    debug!(
        cluster_id = prediction.cluster_id,
        description = %prediction.description,
        "Customer classified"
    );
    record_prediction(prediction.cluster_id, prediction.description);

    Ok(Json(prediction.into()))
}

/// GET /data_summary
pub async fn data_summary(
    State(state): State<AppState>,
) -> Result<Json<DataSummaryResponse>, ApiError> {
    let store = state.models()?;

    Ok(Json(DataSummaryResponse::from(store.data_summary())))
}
