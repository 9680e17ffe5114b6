//! HTTP request and response types

pub mod error;
pub mod json;
pub mod segmentation;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use segmentation::{
    cluster_info_response, ClusterInfoEntry, ClusterInfoResponse, DataSummaryResponse,
    MissingValues, PredictClusterRequest, PredictClusterResponse, RootResponse,
};
