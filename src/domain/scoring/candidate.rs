//! Candidate product records and their scoreable attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CandidateId, Timestamp};

/// A candidate attribute that can feed a decision-matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateAttribute {
    Price,
    QualityScore,
    SparePartsScore,
}

impl CandidateAttribute {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CandidateAttribute::Price => "Price",
            CandidateAttribute::QualityScore => "Quality Score",
            CandidateAttribute::SparePartsScore => "Spare Parts Score",
        }
    }
}

/// A candidate product to be ranked.
///
/// Candidates are loaded by an external data-access collaborator and are
/// immutable during a scoring pass. Attribute ranges are deliberately NOT
/// enforced here: the validator reports out-of-range records as collected
/// violations instead of making them unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub quality_score: i32,
    pub spare_parts_score: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Candidate {
    /// Creates a new candidate with a fresh id and timestamps.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quality_score: i32,
        spare_parts_score: i32,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: CandidateId::new(),
            code: code.into(),
            name: name.into(),
            price,
            quality_score,
            spare_parts_score,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the raw numeric value backing the given attribute.
    pub fn attribute_value(&self, attribute: CandidateAttribute) -> f64 {
        match attribute {
            CandidateAttribute::Price => self.price,
            CandidateAttribute::QualityScore => f64::from(self.quality_score),
            CandidateAttribute::SparePartsScore => f64::from(self.spare_parts_score),
        }
    }

    /// Price formatted with two decimal places.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// One-line summary of the integer scores.
    pub fn score_summary(&self) -> String {
        format!(
            "Quality: {}, Spare Parts: {}",
            self.quality_score, self.spare_parts_score
        )
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
