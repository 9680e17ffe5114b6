//! Column-mean imputation

use ndarray::{Array1, Array2, Axis};

use crate::domain::DomainError;

/// Replaces missing (NaN) values with the per-column mean learned at fit time
#[derive(Debug, Clone, PartialEq)]
pub struct MeanImputer {
    means: Array1<f64>,
}

impl MeanImputer {
    /// Learn column means over the observed values of `data`
    pub fn fit(data: &Array2<f64>) -> Result<Self, DomainError> {
        if data.nrows() == 0 {
            return Err(DomainError::training("Cannot fit imputer on an empty dataset"));
        }

        let mut means = Array1::zeros(data.ncols());

        for (col, column) in data.axis_iter(Axis(1)).enumerate() {
            let observed: Vec<f64> = column.iter().copied().filter(|v| !v.is_nan()).collect();

            if observed.is_empty() {
                return Err(DomainError::training(format!(
                    "Column {} has no observed values to impute from",
                    col
                )));
            }

            means[col] = observed.iter().sum::<f64>() / observed.len() as f64;
        }

        Ok(Self { means })
    }

    pub fn means(&self) -> &Array1<f64> {
        &self.means
    }

    /// Fill missing values of `data` with the learned means
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, DomainError> {
        if data.ncols() != self.means.len() {
            return Err(DomainError::invalid_input(format!(
                "Expected {} features, got {}",
                self.means.len(),
                data.ncols()
            )));
        }

        let mut filled = data.clone();

        for (mut column, mean) in filled.axis_iter_mut(Axis(1)).zip(self.means.iter()) {
            column.mapv_inplace(|v| if v.is_nan() { *mean } else { v });
        }

        Ok(filled)
    }
}
