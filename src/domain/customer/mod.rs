//! Customer domain - Records and the historical dataset used for training

mod dataset;
mod entity;
mod source;

pub use dataset::{CustomerDataset, DatasetSummary};
pub use entity::{CustomerRecord, Feature, FEATURE_COUNT};
pub use source::{DatasetSource, InMemoryDatasetSource};
