//! Pre-pass validation of scoring input.
//!
//! All violations are collected and returned together so a caller can show
//! the complete list; nothing here aborts on first failure.

use std::collections::HashSet;
use thiserror::Error;

use super::candidate::Candidate;
use super::criterion::{CriterionSet, WEIGHT_SUM_TOLERANCE};

/// Minimum number of candidates for a meaningful SAW ranking.
pub const MIN_CANDIDATES: usize = 2;

/// Valid range for the integer candidate scores.
pub const SCORE_MIN: i32 = 1;
pub const SCORE_MAX: i32 = 100;

/// A single human-readable validation violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationViolation {
    #[error("No candidate data to score")]
    NoCandidates,

    #[error("At least 2 candidates are required for a SAW ranking, got {actual}")]
    TooFewCandidates { actual: usize },

    #[error("Candidate code '{code}' appears more than once")]
    DuplicateCode { code: String },

    #[error("Price of candidate '{code}' must be strictly positive, got {price}")]
    NonPositivePrice { code: String, price: f64 },

    #[error("Quality score of candidate '{code}' must be between 1 and 100, got {actual}")]
    QualityScoreOutOfRange { code: String, actual: i32 },

    #[error("Spare parts score of candidate '{code}' must be between 1 and 100, got {actual}")]
    SparePartsScoreOutOfRange { code: String, actual: i32 },

    #[error("Criterion weights must sum to 1.0 within {tolerance}, got {actual}")]
    WeightSumMismatch { actual: f64, tolerance: f64 },
}

/// Validates candidate data and criterion configuration before a pass.
pub struct ScoringValidator;

impl ScoringValidator {
    /// Collects every violation in the input. Empty result means valid.
    ///
    /// An empty candidate list yields a single `NoCandidates` violation; the
    /// scorer separately treats an empty list as a valid, trivial outcome
    /// when invoked directly.
    pub fn validate(candidates: &[Candidate], criteria: &CriterionSet) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();

        if candidates.is_empty() {
            violations.push(ValidationViolation::NoCandidates);
            return violations;
        }

        if candidates.len() < MIN_CANDIDATES {
            violations.push(ValidationViolation::TooFewCandidates {
                actual: candidates.len(),
            });
        }

        let mut seen_codes = HashSet::new();
        for candidate in candidates {
            if !seen_codes.insert(candidate.code.as_str()) {
                violations.push(ValidationViolation::DuplicateCode {
                    code: candidate.code.clone(),
                });
            }

            if !(candidate.price > 0.0) {
                violations.push(ValidationViolation::NonPositivePrice {
                    code: candidate.code.clone(),
                    price: candidate.price,
                });
            }

            if !(SCORE_MIN..=SCORE_MAX).contains(&candidate.quality_score) {
                violations.push(ValidationViolation::QualityScoreOutOfRange {
                    code: candidate.code.clone(),
                    actual: candidate.quality_score,
                });
            }

            if !(SCORE_MIN..=SCORE_MAX).contains(&candidate.spare_parts_score) {
                violations.push(ValidationViolation::SparePartsScoreOutOfRange {
                    code: candidate.code.clone(),
                    actual: candidate.spare_parts_score,
                });
            }
        }

        if !criteria.has_valid_weight_sum() {
            violations.push(ValidationViolation::WeightSumMismatch {
                actual: criteria.weight_sum(),
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::candidate::CandidateAttribute;
    use crate::domain::scoring::criterion::{Criterion, Polarity};

    fn valid_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("A", "Product A", 10_000_000.0, 80, 70),
            Candidate::new("B", "Product B", 8_000_000.0, 90, 60),
        ]
    }

    #[test]
    fn valid_input_has_no_violations() {
        let violations =
            ScoringValidator::validate(&valid_candidates(), &CriterionSet::product_default());
        assert!(violations.is_empty());
    }

    #[test]
    fn empty_candidate_list_reports_no_candidates() {
        let violations = ScoringValidator::validate(&[], &CriterionSet::product_default());
        assert_eq!(violations, vec![ValidationViolation::NoCandidates]);
    }

    #[test]
    fn single_candidate_reports_minimum() {
        let candidates = vec![Candidate::new("A", "Product A", 100.0, 80, 70)];
        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());

        assert_eq!(
            violations,
            vec![ValidationViolation::TooFewCandidates { actual: 1 }]
        );
        assert_eq!(
            format!("{}", violations[0]),
            "At least 2 candidates are required for a SAW ranking, got 1"
        );
    }

    #[test]
    fn zero_price_is_a_violation() {
        let mut candidates = valid_candidates();
        candidates[0].price = 0.0;

        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());
        assert_eq!(
            violations,
            vec![ValidationViolation::NonPositivePrice {
                code: "A".to_string(),
                price: 0.0,
            }]
        );
    }

    #[test]
    fn negative_price_is_a_violation() {
        let mut candidates = valid_candidates();
        candidates[1].price = -5.0;

        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            ValidationViolation::NonPositivePrice { code, .. } if code == "B"
        ));
    }

    #[test]
    fn out_of_range_scores_are_violations() {
        let mut candidates = valid_candidates();
        candidates[0].quality_score = 0;
        candidates[1].spare_parts_score = 101;

        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&ValidationViolation::QualityScoreOutOfRange {
            code: "A".to_string(),
            actual: 0,
        }));
        assert!(violations.contains(&ValidationViolation::SparePartsScoreOutOfRange {
            code: "B".to_string(),
            actual: 101,
        }));
    }

    #[test]
    fn boundary_scores_are_valid() {
        let candidates = vec![
            Candidate::new("A", "Product A", 100.0, 1, 100),
            Candidate::new("B", "Product B", 200.0, 100, 1),
        ];

        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());
        assert!(violations.is_empty());
    }

    #[test]
    fn duplicate_codes_are_violations() {
        let candidates = vec![
            Candidate::new("A", "Product A", 100.0, 80, 70),
            Candidate::new("A", "Product A again", 200.0, 70, 60),
        ];

        let violations =
            ScoringValidator::validate(&candidates, &CriterionSet::product_default());
        assert_eq!(
            violations,
            vec![ValidationViolation::DuplicateCode {
                code: "A".to_string()
            }]
        );
    }

    #[test]
    fn weight_sum_mismatch_is_a_violation() {
        let criteria = CriterionSet::new(vec![
            Criterion::new("Price", 0.40, Polarity::Cost, CandidateAttribute::Price),
            Criterion::new(
                "Quality",
                0.35,
                Polarity::Benefit,
                CandidateAttribute::QualityScore,
            ),
            Criterion::new(
                "Spare Parts",
                0.15,
                Polarity::Benefit,
                CandidateAttribute::SparePartsScore,
            ),
        ]);

        let violations = ScoringValidator::validate(&valid_candidates(), &criteria);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            ValidationViolation::WeightSumMismatch { .. }
        ));
    }

    #[test]
    fn all_violations_are_collected_together() {
        let mut candidates = valid_candidates();
        candidates[0].price = 0.0;
        candidates[0].quality_score = 0;
        candidates[1].spare_parts_score = 200;

        let criteria = CriterionSet::new(vec![Criterion::new(
            "Price",
            0.5,
            Polarity::Cost,
            CandidateAttribute::Price,
        )]);

        let violations = ScoringValidator::validate(&candidates, &criteria);
        assert_eq!(violations.len(), 4);
    }
}
