//! Domain layer - Customer data and the segmentation model

pub mod customer;
pub mod error;
pub mod segmentation;

pub use customer::{CustomerDataset, CustomerRecord, DatasetSource, Feature};
pub use error::DomainError;
pub use segmentation::{ClusterProfile, ModelStore, Prediction, SegmentDescription};
