//! Scoring configuration - the runtime-tunable criterion weights.

use serde::Deserialize;

use crate::domain::scoring::{CriterionSet, WEIGHT_SUM_TOLERANCE};

use super::error::ValidationError;

/// Weights for the three product criteria.
///
/// Polarity and attribute bindings stay fixed (Price is always cost, the two
/// scores always benefit); only the weights are configurable. Defaults
/// reproduce the standard table.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the Price criterion (cost)
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,

    /// Weight of the Quality criterion (benefit)
    #[serde(default = "default_quality_weight")]
    pub quality_weight: f64,

    /// Weight of the Spare Parts criterion (benefit)
    #[serde(default = "default_spare_parts_weight")]
    pub spare_parts_weight: f64,
}

impl ScoringConfig {
    /// Validate the configured weights
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, weight) in [
            ("price_weight", self.price_weight),
            ("quality_weight", self.quality_weight),
            ("spare_parts_weight", self.spare_parts_weight),
        ] {
            if !(weight > 0.0 && weight < 1.0) {
                return Err(ValidationError::InvalidWeight { name, weight });
            }
        }

        let sum = self.price_weight + self.quality_weight + self.spare_parts_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch { sum });
        }

        Ok(())
    }

    /// Builds the criterion table carrying these weights.
    pub fn criterion_set(&self) -> CriterionSet {
        let mut criteria: Vec<_> = CriterionSet::product_default()
            .criteria()
            .to_vec();
        criteria[0].weight = self.price_weight;
        criteria[1].weight = self.quality_weight;
        criteria[2].weight = self.spare_parts_weight;
        CriterionSet::new(criteria)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            price_weight: default_price_weight(),
            quality_weight: default_quality_weight(),
            spare_parts_weight: default_spare_parts_weight(),
        }
    }
}

fn default_price_weight() -> f64 {
    0.40
}

fn default_quality_weight() -> f64 {
    0.35
}

fn default_spare_parts_weight() -> f64 {
    0.25
}
