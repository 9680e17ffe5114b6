//! K-Means clustering model

use linfa::prelude::*;
use linfa_clustering::KMeans;
use linfa_nn::distance::L2Dist;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::domain::DomainError;

/// Number of customer segments
pub const N_CLUSTERS: usize = 5;

/// Seed for centroid initialization; fixed so fits are reproducible
pub const RANDOM_SEED: u64 = 42;

/// Maximum Lloyd iterations per run
pub const MAX_ITERATIONS: u64 = 300;

/// Convergence tolerance on centroid movement
pub const TOLERANCE: f64 = 1e-4;

/// Independent initializations; the run with the lowest inertia wins
pub const N_RUNS: usize = 10;

/// Fitted K-Means clustering over standardized features
#[derive(Debug, Clone)]
pub struct ClusterModel {
    /// Fitted linfa model; centers are in the space it was fit in
    model: KMeans<f64, L2Dist>,
    /// Cluster assignment of every training row
    labels: Array1<usize>,
    /// Within-cluster sum of squares
    inertia: f64,
}

impl ClusterModel {
    /// Fit K-Means on `features` with the fixed segment count and seed
    pub fn fit(features: &Array2<f64>) -> Result<Self, DomainError> {
        Self::fit_with(features, N_CLUSTERS, RANDOM_SEED)
    }

    pub fn fit_with(
        features: &Array2<f64>,
        n_clusters: usize,
        seed: u64,
    ) -> Result<Self, DomainError> {
        if n_clusters == 0 {
            return Err(DomainError::training("Number of clusters must be positive"));
        }

        if features.nrows() < n_clusters {
            return Err(DomainError::training(format!(
                "Number of data points ({}) must be at least equal to number of clusters ({})",
                features.nrows(),
                n_clusters
            )));
        }

        if features.iter().any(|v| !v.is_finite()) {
            return Err(DomainError::training(
                "Features must be finite before clustering",
            ));
        }

        let dataset = DatasetBase::from(features.clone());
        let rng = Xoshiro256Plus::seed_from_u64(seed);

        let model: KMeans<f64, L2Dist> = KMeans::params_with(n_clusters, rng, L2Dist)
            .n_runs(N_RUNS)
            .max_n_iterations(MAX_ITERATIONS)
            .tolerance(TOLERANCE)
            .fit(&dataset)
            .map_err(|e| DomainError::training(e.to_string()))?;

        let labels: Array1<usize> = model.predict(&dataset);
        let inertia = compute_inertia(features, &labels, model.centroids());

        Ok(Self {
            model,
            labels,
            inertia,
        })
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids().nrows()
    }

    /// Cluster centers, shape (n_clusters, n_features)
    pub fn centroids(&self) -> &Array2<f64> {
        self.model.centroids()
    }

    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Assign a point to its nearest centroid
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> Result<usize, DomainError> {
        let centroids = self.centroids();

        if features.len() != centroids.ncols() {
            return Err(DomainError::invalid_input(format!(
                "Feature vector must have exactly {} dimensions",
                centroids.ncols()
            )));
        }

        if features.iter().any(|v| !v.is_finite()) {
            return Err(DomainError::invalid_input(
                "Feature values must be finite after scaling",
            ));
        }

        let point = features.insert_axis(Axis(0)).to_owned();
        let labels: Array1<usize> = self.model.predict(&point);

        let closest_cluster = labels
            .first()
            .copied()
            .ok_or_else(|| DomainError::internal("Clustering returned no assignment"))?;

        // Every distance overflowed; linfa falls back to cluster 0
        if !squared_distance(&features, &centroids.row(closest_cluster)).is_finite() {
            return Err(DomainError::invalid_input(
                "Feature values are too large to compare with cluster centers",
            ));
        }

        Ok(closest_cluster)
    }

    /// Member count per cluster
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters()];
        for &label in self.labels.iter() {
            if label < sizes.len() {
                sizes[label] += 1;
            }
        }
        sizes
    }
}

fn compute_inertia(features: &Array2<f64>, labels: &Array1<usize>, centroids: &Array2<f64>) -> f64 {
    features
        .outer_iter()
        .zip(labels.iter())
        .filter(|(_, cluster)| **cluster < centroids.nrows())
        .map(|(point, &cluster)| squared_distance(&point, &centroids.row(cluster)))
        .sum()
}

fn squared_distance(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Three well separated blobs of four points each
    fn blobs() -> Array2<f64> {
        array![
            [-5.0, -5.0],
            [-5.1, -4.9],
            [-4.9, -5.2],
            [-5.2, -5.1],
            [0.0, 0.0],
            [0.1, -0.1],
            [-0.1, 0.1],
            [0.2, 0.0],
            [5.0, 5.0],
            [5.1, 4.9],
            [4.9, 5.1],
            [5.2, 5.2],
        ]
    }

    #[test]
    fn test_fit_shapes() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();

        assert_eq!(model.n_clusters(), 3);
        assert_eq!(model.labels().len(), 12);
        assert_eq!(model.centroids().shape(), &[3, 2]);
    }

    #[test]
    fn test_fit_separates_blobs() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let labels = model.labels();

        for blob in 0..3 {
            let first = labels[blob * 4];
            for i in 0..4 {
                assert_eq!(labels[blob * 4 + i], first);
            }
        }
        assert_ne!(labels[0], labels[4]);
        assert_ne!(labels[4], labels[8]);
        assert_ne!(labels[0], labels[8]);
    }

    #[test]
    fn test_cluster_sizes_sum_to_rows() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let sizes = model.cluster_sizes();

        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes.iter().sum::<usize>(), 12);
    }

    #[test]
    fn test_fit_is_deterministic_for_seed() {
        let first = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let second = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();

        assert_eq!(first.centroids(), second.centroids());
        assert_eq!(first.labels(), second.labels());
    }

    #[test]
    fn test_predict_matches_training_labels() {
        let data = blobs();
        let model = ClusterModel::fit_with(&data, 3, RANDOM_SEED).unwrap();

        for (row, &label) in data.outer_iter().zip(model.labels().iter()) {
            assert_eq!(model.predict(row).unwrap(), label);
        }
    }

    #[test]
    fn test_predict_rejects_wrong_dimensions() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let point = array![1.0, 2.0, 3.0];

        assert!(model.predict(point.view()).is_err());
    }

    #[test]
    fn test_predict_rejects_non_finite() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let point = array![f64::NAN, 0.0];

        assert!(matches!(
            model.predict(point.view()),
            Err(DomainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_predict_rejects_overflowing_distance() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        let point = array![1e200, -1e200];

        assert!(matches!(
            model.predict(point.view()),
            Err(DomainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_too_few_points() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let result = ClusterModel::fit_with(&data, 3, RANDOM_SEED);

        assert!(matches!(result, Err(DomainError::Training { .. })));
    }

    #[test]
    fn test_inertia_is_small_for_tight_blobs() {
        let model = ClusterModel::fit_with(&blobs(), 3, RANDOM_SEED).unwrap();
        assert!(model.inertia() < 1.0);
    }
}
