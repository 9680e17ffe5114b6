//! CSV dataset source backed by Polars

use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, info};

use crate::domain::customer::{CustomerDataset, DatasetSource, Feature};
use crate::domain::DomainError;

/// Loads the customer dataset from a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<CustomerDataset, DomainError> {
        if !self.path.is_file() {
            return Err(DomainError::data_load(format!(
                "Input file '{}' not found",
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), "Reading customer CSV");

        // Infer over the whole file; a column can look integral for many rows
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .and_then(|reader| reader.finish())
            .map_err(|e| {
                DomainError::data_load(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        let dataset = frame_to_dataset(&df)?;

        info!(
            path = %self.path.display(),
            rows = dataset.len(),
            columns = df.width(),
            "Customer dataset loaded"
        );

        Ok(dataset)
    }
}

/// Select the clustering features from a frame. Nulls become missing values.
pub fn frame_to_dataset(df: &DataFrame) -> Result<CustomerDataset, DomainError> {
    let [balance, purchases, credit_limit] = [
        feature_column(df, Feature::Balance)?,
        feature_column(df, Feature::Purchases)?,
        feature_column(df, Feature::CreditLimit)?,
    ];

    CustomerDataset::from_columns(balance, purchases, credit_limit)
}

fn feature_column(df: &DataFrame, feature: Feature) -> Result<Vec<Option<f64>>, DomainError> {
    let name = feature.column_name();

    let series = df
        .column(name)
        .map_err(|_| DomainError::data_load(format!("Missing required column '{}'", name)))?;

    let values = series.cast(&DataType::Float64).map_err(|e| {
        DomainError::data_load(format!("Column '{}' is not numeric: {}", name, e))
    })?;

    let values = values
        .f64()
        .map_err(|e| DomainError::data_load(format!("Column '{}': {}", name, e)))?;

    Ok(values.into_iter().collect())
}
