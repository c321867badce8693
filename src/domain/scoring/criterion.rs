//! Criterion value objects and the ordered criterion table.
//!
//! Each criterion bundles name, weight, polarity, and the candidate
//! attribute it reads, so the weight/polarity/name triple can never drift
//! apart the way parallel arrays do.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate::CandidateAttribute;

/// Tolerance for the weight-sum invariant (weights must sum to 1.0).
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Whether higher or lower raw values are better for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw values are better; normalized by the column maximum.
    Benefit,
    /// Lower raw values are better; normalized by the column minimum.
    Cost,
}

impl Polarity {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "Benefit",
            Polarity::Cost => "Cost",
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Polarity::Benefit)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single weighted criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub polarity: Polarity,
    /// The candidate attribute this criterion reads into its matrix column.
    pub attribute: CandidateAttribute,
    pub description: Option<String>,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        polarity: Polarity,
        attribute: CandidateAttribute,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            polarity,
            attribute,
            description: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Weight formatted as a percentage.
    pub fn formatted_weight_percent(&self) -> String {
        format!("{:.1}%", self.weight * 100.0)
    }
}

/// An ordered, immutable criterion table for one scoring pass.
///
/// The order of criteria fixes the column order of the decision matrix.
/// The weight-sum invariant is validated (see `has_valid_weight_sum` and the
/// scoring validator), not enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSet {
    criteria: Vec<Criterion>,
}

impl CriterionSet {
    /// Creates a criterion set from an ordered list.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// The fixed product-ranking table: Price (0.40, cost), Quality (0.35,
    /// benefit), Spare Parts (0.25, benefit).
    pub fn product_default() -> Self {
        Self::new(vec![
            Criterion::new("Price", 0.40, Polarity::Cost, CandidateAttribute::Price)
                .with_description("Product price (lower is better)"),
            Criterion::new(
                "Quality",
                0.35,
                Polarity::Benefit,
                CandidateAttribute::QualityScore,
            )
            .with_description("Product quality score (higher is better)"),
            Criterion::new(
                "Spare Parts",
                0.25,
                Polarity::Benefit,
                CandidateAttribute::SparePartsScore,
            )
            .with_description("Spare parts availability (higher is better)"),
        ])
    }

    /// Returns the criteria in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the criterion at the given column, if any.
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    /// Iterates criteria in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Number of criteria (matrix columns).
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if the set has no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }

    /// Checks the weight-sum invariant: 1.0 within `WEIGHT_SUM_TOLERANCE`.
    pub fn has_valid_weight_sum(&self) -> bool {
        (self.weight_sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}
