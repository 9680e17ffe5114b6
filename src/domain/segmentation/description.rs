//! Human-readable segment labels derived from cluster centers

use std::fmt;

use serde::Serialize;

/// Standardized coordinate a center must exceed to count as "high"
pub const HIGH_THRESHOLD: f64 = 0.5;

/// Label for a customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentDescription {
    #[serde(rename = "High Balance & High Purchase")]
    HighBalanceHighPurchase,
    #[serde(rename = "High Balance & Low Purchase")]
    HighBalanceLowPurchase,
    #[serde(rename = "Low Balance & High Purchase")]
    LowBalanceHighPurchase,
    #[serde(rename = "Low Balance & Low Purchase")]
    LowBalanceLowPurchase,
}

impl SegmentDescription {
    pub const ALL: [SegmentDescription; 4] = [
        Self::HighBalanceHighPurchase,
        Self::HighBalanceLowPurchase,
        Self::LowBalanceHighPurchase,
        Self::LowBalanceLowPurchase,
    ];

    /// Classify a cluster center by its balance and purchases coordinates
    pub fn from_center(balance: f64, purchases: f64) -> Self {
        match (balance > HIGH_THRESHOLD, purchases > HIGH_THRESHOLD) {
            (true, true) => Self::HighBalanceHighPurchase,
            (true, false) => Self::HighBalanceLowPurchase,
            (false, true) => Self::LowBalanceHighPurchase,
            (false, false) => Self::LowBalanceLowPurchase,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighBalanceHighPurchase => "High Balance & High Purchase",
            Self::HighBalanceLowPurchase => "High Balance & Low Purchase",
            Self::LowBalanceHighPurchase => "Low Balance & High Purchase",
            Self::LowBalanceLowPurchase => "Low Balance & Low Purchase",
        }
    }
}

impl fmt::Display for SegmentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_quadrants() {
        assert_eq!(
            SegmentDescription::from_center(1.2, 0.9),
            SegmentDescription::HighBalanceHighPurchase
        );
        assert_eq!(
            SegmentDescription::from_center(1.2, -0.3),
            SegmentDescription::HighBalanceLowPurchase
        );
        assert_eq!(
            SegmentDescription::from_center(-0.4, 2.0),
            SegmentDescription::LowBalanceHighPurchase
        );
        assert_eq!(
            SegmentDescription::from_center(0.1, 0.1),
            SegmentDescription::LowBalanceLowPurchase
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(
            SegmentDescription::from_center(0.5, 0.5),
            SegmentDescription::LowBalanceLowPurchase
        );
    }

    #[test]
    fn test_serializes_as_label() {
        for description in SegmentDescription::ALL {
            let json = serde_json::to_string(&description).unwrap();
            assert_eq!(json, format!("\"{}\"", description.as_str()));
        }
    }
}
