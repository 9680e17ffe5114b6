//! Customer domain entities

use std::fmt;

use ndarray::Array1;

/// Number of features the segmentation model is trained on
pub const FEATURE_COUNT: usize = 3;

/// Customer attribute used as a clustering feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Balance,
    Purchases,
    CreditLimit,
}

impl Feature {
    /// All features in model column order
    pub const ALL: [Feature; FEATURE_COUNT] =
        [Feature::Balance, Feature::Purchases, Feature::CreditLimit];

    /// Column position in the feature matrix
    pub fn index(self) -> usize {
        match self {
            Self::Balance => 0,
            Self::Purchases => 1,
            Self::CreditLimit => 2,
        }
    }

    /// Column header in the source CSV
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Balance => "BALANCE",
            Self::Purchases => "PURCHASES",
            Self::CreditLimit => "CREDIT_LIMIT",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// A single customer to classify. `None` marks a missing value that the
/// imputer fills in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CustomerRecord {
    pub balance: Option<f64>,
    pub purchases: Option<f64>,
    pub credit_limit: Option<f64>,
}

impl CustomerRecord {
    /// Create a record with every feature present
    pub fn new(balance: f64, purchases: f64, credit_limit: f64) -> Self {
        Self {
            balance: Some(balance),
            purchases: Some(purchases),
            credit_limit: Some(credit_limit),
        }
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Balance => self.balance,
            Feature::Purchases => self.purchases,
            Feature::CreditLimit => self.credit_limit,
        }
    }

    /// Feature row in model column order, missing values as NaN
    pub fn to_row(&self) -> Array1<f64> {
        Feature::ALL
            .iter()
            .map(|f| self.get(*f).unwrap_or(f64::NAN))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_index() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_feature_column_names() {
        assert_eq!(Feature::Balance.column_name(), "BALANCE");
        assert_eq!(Feature::Purchases.column_name(), "PURCHASES");
        assert_eq!(Feature::CreditLimit.to_string(), "CREDIT_LIMIT");
    }

    #[test]
    fn test_to_row_marks_missing_as_nan() {
        let record = CustomerRecord {
            balance: Some(120.5),
            purchases: None,
            credit_limit: Some(1000.0),
        };

        let row = record.to_row();
        assert_eq!(row.len(), FEATURE_COUNT);
        assert_eq!(row[0], 120.5);
        assert!(row[1].is_nan());
        assert_eq!(row[2], 1000.0);
    }
}
