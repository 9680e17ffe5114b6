//! Fitted segmentation model and the data it was trained on

use chrono::{DateTime, Utc};
use ndarray::{Array1, Axis};
use tracing::{debug, info};

use super::description::SegmentDescription;
use super::imputer::MeanImputer;
use super::kmeans::ClusterModel;
use super::scaler::StandardScaler;
use crate::domain::customer::{CustomerDataset, CustomerRecord, DatasetSummary, Feature};
use crate::domain::DomainError;

/// Size, center and label of one fitted cluster
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterProfile {
    pub id: usize,
    pub size: usize,
    /// Center in the standardized feature space the model was fit in
    pub center: Array1<f64>,
    pub description: SegmentDescription,
}

impl ClusterProfile {
    pub fn center_of(&self, feature: Feature) -> f64 {
        self.center[feature.index()]
    }
}

/// Result of classifying one customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub cluster_id: usize,
    pub description: SegmentDescription,
}

/// Imputer, scaler and clustering model fit together from one dataset
/// snapshot. Only [`ModelStore::train`] can build one, so the transform
/// chain always matches the fitted centers.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dataset: CustomerDataset,
    summary: DatasetSummary,
    imputer: MeanImputer,
    scaler: StandardScaler,
    clusters: ClusterModel,
    profiles: Vec<ClusterProfile>,
    trained_at: DateTime<Utc>,
}

impl ModelStore {
    /// Impute, standardize, then cluster `dataset`
    pub fn train(dataset: CustomerDataset) -> Result<Self, DomainError> {
        if dataset.is_empty() {
            return Err(DomainError::training("Dataset contains no customers"));
        }

        let summary = dataset.summary();
        info!(
            customers = summary.total_customers,
            missing_balance = summary.missing(Feature::Balance),
            missing_purchases = summary.missing(Feature::Purchases),
            missing_credit_limit = summary.missing(Feature::CreditLimit),
            "Training segmentation model"
        );

        if let Some(empty) = Feature::ALL
            .into_iter()
            .find(|f| summary.missing(*f) == summary.total_customers)
        {
            return Err(DomainError::training(format!(
                "Column '{}' has no values to impute from",
                empty
            )));
        }

        let imputer = MeanImputer::fit(dataset.features())?;
        let imputed = imputer.transform(dataset.features())?;

        let scaler = StandardScaler::fit(&imputed)?;
        let scaled = scaler.transform(&imputed)?;

        let clusters = ClusterModel::fit(&scaled)?;
        let profiles = build_profiles(&clusters);

        for profile in &profiles {
            debug!(
                cluster = profile.id,
                size = profile.size,
                description = %profile.description,
                "Cluster fitted"
            );
        }

        info!(
            clusters = clusters.n_clusters(),
            inertia = clusters.inertia(),
            "Segmentation model trained"
        );

        Ok(Self {
            dataset,
            summary,
            imputer,
            scaler,
            clusters,
            profiles,
            trained_at: Utc::now(),
        })
    }

    /// Impute, scale, then assign `record` to its nearest cluster
    pub fn predict(&self, record: &CustomerRecord) -> Result<Prediction, DomainError> {
        let row = record.to_row().insert_axis(Axis(0));

        let imputed = self.imputer.transform(&row)?;
        let scaled = self.scaler.transform(&imputed)?;
        let cluster_id = self.clusters.predict(scaled.row(0))?;

        let profile = self
            .profiles
            .get(cluster_id)
            .ok_or_else(|| DomainError::internal(format!("Unknown cluster {}", cluster_id)))?;

        Ok(Prediction {
            cluster_id,
            description: profile.description,
        })
    }

    pub fn cluster_profiles(&self) -> &[ClusterProfile] {
        &self.profiles
    }

    pub fn data_summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn dataset(&self) -> &CustomerDataset {
        &self.dataset
    }

    pub fn clusters(&self) -> &ClusterModel {
        &self.clusters
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }
}

fn build_profiles(clusters: &ClusterModel) -> Vec<ClusterProfile> {
    clusters
        .cluster_sizes()
        .into_iter()
        .zip(clusters.centroids().outer_iter())
        .enumerate()
        .map(|(id, (size, center))| ClusterProfile {
            id,
            size,
            center: center.to_owned(),
            description: SegmentDescription::from_center(
                center[Feature::Balance.index()],
                center[Feature::Purchases.index()],
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segmentation::N_CLUSTERS;

    /// Deterministic spread of customers with a few missing cells
    fn synthetic_dataset() -> CustomerDataset {
        let mut balance = Vec::new();
        let mut purchases = Vec::new();
        let mut credit_limit = Vec::new();

        for i in 0..60 {
            let group = (i % 5) as f64;
            let jitter = (i / 5) as f64 * 3.0;
            balance.push(Some(group * 1500.0 + jitter));
            purchases.push(Some(((i * 7) % 5) as f64 * 800.0 + jitter));
            credit_limit.push(Some(1000.0 + group * 2000.0 + jitter * 10.0));
        }

        balance[3] = None;
        credit_limit[10] = None;
        credit_limit[11] = None;

        CustomerDataset::from_columns(balance, purchases, credit_limit).unwrap()
    }

    #[test]
    fn test_train_builds_all_profiles() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();

        assert_eq!(store.cluster_profiles().len(), N_CLUSTERS);
        for (i, profile) in store.cluster_profiles().iter().enumerate() {
            assert_eq!(profile.id, i);
            assert_eq!(profile.center.len(), 3);
        }
    }

    #[test]
    fn test_cluster_sizes_sum_to_dataset_rows() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let total: usize = store.cluster_profiles().iter().map(|p| p.size).sum();

        assert_eq!(total, store.dataset().len());
    }

    #[test]
    fn test_profile_descriptions_follow_center_rule() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();

        for profile in store.cluster_profiles() {
            let expected = SegmentDescription::from_center(
                profile.center_of(Feature::Balance),
                profile.center_of(Feature::Purchases),
            );
            assert_eq!(profile.description, expected);
        }
    }

    #[test]
    fn test_predict_in_range_and_consistent() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let prediction = store
            .predict(&CustomerRecord::new(0.0, 0.0, 0.0))
            .unwrap();

        assert!(prediction.cluster_id < N_CLUSTERS);
        assert_eq!(
            prediction.description,
            store.cluster_profiles()[prediction.cluster_id].description
        );
    }

    #[test]
    fn test_predict_is_idempotent() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let record = CustomerRecord::new(2500.0, 1200.0, 5000.0);

        let first = store.predict(&record).unwrap();
        let second = store.predict(&record).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_imputes_missing_fields() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let record = CustomerRecord {
            balance: None,
            purchases: Some(100.0),
            credit_limit: None,
        };

        let prediction = store.predict(&record).unwrap();
        assert!(prediction.cluster_id < N_CLUSTERS);
    }

    #[test]
    fn test_predict_rejects_non_finite_input() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let record = CustomerRecord::new(f64::INFINITY, 0.0, 0.0);

        assert!(matches!(
            store.predict(&record),
            Err(DomainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_training_is_reproducible() {
        let first = ModelStore::train(synthetic_dataset()).unwrap();
        let second = ModelStore::train(synthetic_dataset()).unwrap();

        assert_eq!(first.clusters().centroids(), second.clusters().centroids());
        assert_eq!(first.clusters().labels(), second.clusters().labels());
    }

    #[test]
    fn test_train_rejects_empty_dataset() {
        let dataset = CustomerDataset::from_records(&[]);
        assert!(matches!(
            ModelStore::train(dataset),
            Err(DomainError::Training { .. })
        ));
    }

    #[test]
    fn test_train_rejects_fewer_rows_than_clusters() {
        let dataset = CustomerDataset::from_records(&[
            CustomerRecord::new(1.0, 2.0, 3.0),
            CustomerRecord::new(4.0, 5.0, 6.0),
        ]);
        assert!(ModelStore::train(dataset).is_err());
    }

    #[test]
    fn test_train_rejects_column_without_values() {
        let records: Vec<CustomerRecord> = (0..10)
            .map(|i| CustomerRecord {
                balance: Some(i as f64 * 10.0),
                purchases: Some(i as f64),
                credit_limit: None,
            })
            .collect();

        let result = ModelStore::train(CustomerDataset::from_records(&records));

        match result {
            Err(DomainError::Training { message }) => assert!(message.contains("CREDIT_LIMIT")),
            other => panic!("expected training error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_summary_matches_dataset() {
        let store = ModelStore::train(synthetic_dataset()).unwrap();
        let summary = store.data_summary();

        assert_eq!(summary.total_customers, 60);
        assert_eq!(summary.missing(Feature::Balance), 1);
        assert_eq!(summary.missing(Feature::Purchases), 0);
        assert_eq!(summary.missing(Feature::CreditLimit), 2);
    }
}
