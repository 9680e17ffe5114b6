//! Segmentation API types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::customer::{CustomerRecord, DatasetSummary, Feature};
use crate::domain::segmentation::{ClusterProfile, Prediction, SegmentDescription};

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Body of `POST /predict_cluster`. All three fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictClusterRequest {
    #[serde(rename = "BALANCE")]
    pub balance: f64,
    #[serde(rename = "PURCHASES")]
    pub purchases: f64,
    #[serde(rename = "CREDIT_LIMIT")]
    pub credit_limit: f64,
}

impl From<PredictClusterRequest> for CustomerRecord {
    fn from(request: PredictClusterRequest) -> Self {
        Self::new(request.balance, request.purchases, request.credit_limit)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictClusterResponse {
    pub cluster_id: usize,
    pub cluster_description: SegmentDescription,
}

impl From<Prediction> for PredictClusterResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            cluster_id: prediction.cluster_id,
            cluster_description: prediction.description,
        }
    }
}

/// One entry of `GET /cluster_info`. Centers are in standardized units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterInfoEntry {
    pub size: usize,
    pub center_balance: f64,
    pub center_purchases: f64,
    pub center_credit_limit: f64,
}

impl From<&ClusterProfile> for ClusterInfoEntry {
    fn from(profile: &ClusterProfile) -> Self {
        Self {
            size: profile.size,
            center_balance: profile.center_of(Feature::Balance),
            center_purchases: profile.center_of(Feature::Purchases),
            center_credit_limit: profile.center_of(Feature::CreditLimit),
        }
    }
}

/// `"Cluster {i}"` to its size and center
pub type ClusterInfoResponse = BTreeMap<String, ClusterInfoEntry>;

pub fn cluster_info_response(profiles: &[ClusterProfile]) -> ClusterInfoResponse {
    profiles
        .iter()
        .map(|profile| (format!("Cluster {}", profile.id), ClusterInfoEntry::from(profile)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValues {
    pub balance: usize,
    pub purchases: usize,
    pub credit_limit: usize,
}

/// Body of `GET /data_summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummaryResponse {
    pub total_customers: usize,
    pub average_balance: Option<f64>,
    pub average_purchases: Option<f64>,
    pub average_credit_limit: Option<f64>,
    pub missing_values: MissingValues,
}

impl From<&DatasetSummary> for DataSummaryResponse {
    fn from(summary: &DatasetSummary) -> Self {
        Self {
            total_customers: summary.total_customers,
            average_balance: summary.mean(Feature::Balance),
            average_purchases: summary.mean(Feature::Purchases),
            average_credit_limit: summary.mean(Feature::CreditLimit),
            missing_values: MissingValues {
                balance: summary.missing(Feature::Balance),
                purchases: summary.missing(Feature::Purchases),
                credit_limit: summary.missing(Feature::CreditLimit),
            },
        }
    }
}
