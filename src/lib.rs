//! Credit Card Segmentation API
//!
//! Serves a K-Means customer segmentation model over balance, purchases and
//! credit limit:
//! - Mean imputation and z-score scaling fit once at startup
//! - Five segments with a fixed seed, so results are reproducible
//! - Read-only cluster and dataset summaries over HTTP

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::{DatasetSource, DomainError, ModelStore};
use infrastructure::dataset::CsvDatasetSource;

/// Load the dataset from `source` and train the model off the async runtime
pub async fn train_model(source: Arc<dyn DatasetSource>) -> Result<ModelStore, DomainError> {
    tokio::task::spawn_blocking(move || {
        let dataset = source.load()?;
        ModelStore::train(dataset)
    })
    .await
    .map_err(|e| DomainError::internal(format!("Training task failed: {}", e)))?
}

/// Train from the configured CSV and return state ready to serve
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(path = %config.model.data_path, "Loading model and data");

    let source = Arc::new(CsvDatasetSource::new(&config.model.data_path));
    let store = train_model(source).await?;

    let state = AppState::new();
    state.install(store)?;

    Ok(state)
}
