//! Historical customer dataset

use ndarray::{Array2, ArrayView1};

use super::entity::{CustomerRecord, Feature, FEATURE_COUNT};
use crate::domain::DomainError;

/// Ordered table of historical customers restricted to the clustering
/// features. Missing cells are stored as NaN.
#[derive(Debug, Clone)]
pub struct CustomerDataset {
    features: Array2<f64>,
}

impl CustomerDataset {
    /// Build a dataset from one column per feature
    pub fn from_columns(
        balance: Vec<Option<f64>>,
        purchases: Vec<Option<f64>>,
        credit_limit: Vec<Option<f64>>,
    ) -> Result<Self, DomainError> {
        let rows = balance.len();

        if purchases.len() != rows || credit_limit.len() != rows {
            return Err(DomainError::data_load(format!(
                "Column lengths differ: BALANCE={}, PURCHASES={}, CREDIT_LIMIT={}",
                rows,
                purchases.len(),
                credit_limit.len()
            )));
        }

        let mut features = Array2::from_elem((rows, FEATURE_COUNT), f64::NAN);

        for (feature, column) in Feature::ALL.iter().zip([balance, purchases, credit_limit]) {
            for (row, value) in column.into_iter().enumerate() {
                features[[row, feature.index()]] = value.unwrap_or(f64::NAN);
            }
        }

        Ok(Self { features })
    }

    /// Build a dataset from in-memory records
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let mut features = Array2::from_elem((records.len(), FEATURE_COUNT), f64::NAN);

        for (mut row, record) in features.rows_mut().into_iter().zip(records) {
            row.assign(&record.to_row());
        }

        Self { features }
    }

    /// Number of customers
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw feature matrix (n_customers, 3), NaN where a value is missing
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn column(&self, feature: Feature) -> ArrayView1<'_, f64> {
        self.features.column(feature.index())
    }

    /// Count of missing cells in a feature column
    pub fn missing_count(&self, feature: Feature) -> usize {
        self.column(feature).iter().filter(|v| v.is_nan()).count()
    }

    /// Mean over observed values; `None` when the column has none
    pub fn observed_mean(&self, feature: Feature) -> Option<f64> {
        let (sum, count) = self
            .column(feature)
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

        (count > 0).then(|| sum / count as f64)
    }

    /// Row count, per-feature means and missing counts
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            total_customers: self.len(),
            means: Feature::ALL.map(|f| self.observed_mean(f)),
            missing: Feature::ALL.map(|f| self.missing_count(f)),
        }
    }
}

/// Descriptive statistics over the training dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_customers: usize,
    means: [Option<f64>; FEATURE_COUNT],
    missing: [usize; FEATURE_COUNT],
}

impl DatasetSummary {
    pub fn mean(&self, feature: Feature) -> Option<f64> {
        self.means[feature.index()]
    }

    pub fn missing(&self, feature: Feature) -> usize {
        self.missing[feature.index()]
    }
}
