//! Dataset source trait

use std::fmt::Debug;

use super::dataset::CustomerDataset;
use crate::domain::DomainError;

/// Provides the historical dataset the model is trained on
pub trait DatasetSource: Send + Sync + Debug {
    fn load(&self) -> Result<CustomerDataset, DomainError>;
}

/// Dataset held in memory, for tests and embedding
#[derive(Debug, Clone)]
pub struct InMemoryDatasetSource {
    dataset: CustomerDataset,
}

impl InMemoryDatasetSource {
    pub fn new(dataset: CustomerDataset) -> Self {
        Self { dataset }
    }
}

impl DatasetSource for InMemoryDatasetSource {
    fn load(&self) -> Result<CustomerDataset, DomainError> {
        Ok(self.dataset.clone())
    }
}
