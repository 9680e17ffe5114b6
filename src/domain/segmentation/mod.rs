//! Segmentation domain - Imputation, scaling and K-Means clustering of customers

mod description;
mod imputer;
mod kmeans;
mod scaler;
mod store;

pub use description::{SegmentDescription, HIGH_THRESHOLD};
pub use imputer::MeanImputer;
pub use kmeans::{ClusterModel, MAX_ITERATIONS, N_CLUSTERS, N_RUNS, RANDOM_SEED, TOLERANCE};
pub use scaler::StandardScaler;
pub use store::{ClusterProfile, ModelStore, Prediction};
