//! Z-score standardization

use ndarray::{Array1, Array2, Axis};

use crate::domain::DomainError;

/// Standardizes features to zero mean and unit variance using per-column
/// statistics learned at fit time. Uses the population standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn fit(data: &Array2<f64>) -> Result<Self, DomainError> {
        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| DomainError::training("Cannot fit scaler on an empty dataset"))?;

        // Constant columns keep their values centered but unscaled
        let scale = data
            .std_axis(Axis(0), 0.0)
            .mapv(|std| if std > 0.0 && std.is_finite() { std } else { 1.0 });

        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, DomainError> {
        if data.ncols() != self.mean.len() {
            return Err(DomainError::invalid_input(format!(
                "Expected {} features, got {}",
                self.mean.len(),
                data.ncols()
            )));
        }

        Ok((data - &self.mean) / &self.scale)
    }
}
