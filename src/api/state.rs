//! Application state shared by handlers

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::domain::segmentation::ModelStore;
use crate::domain::DomainError;

/// Context passed to every handler. The model slot is written once after
/// training and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    models: Arc<OnceCell<ModelStore>>,
}

impl AppState {
    /// State with no model installed yet
    pub fn new() -> Self {
        Self::default()
    }

    /// State with an already trained model
    pub fn with_models(store: ModelStore) -> Self {
        Self {
            models: Arc::new(OnceCell::with_value(store)),
        }
    }

    /// Install the trained model. Fails if one is already installed.
    pub fn install(&self, store: ModelStore) -> Result<(), DomainError> {
        self.models
            .set(store)
            .map_err(|_| DomainError::internal("Model already installed"))
    }

    /// The trained model, or a not-ready error before startup completes
    pub fn models(&self) -> Result<&ModelStore, DomainError> {
        self.models
            .get()
            .ok_or_else(|| DomainError::not_ready("Model not loaded"))
    }

    pub fn is_ready(&self) -> bool {
        self.models.get().is_some()
    }
}
