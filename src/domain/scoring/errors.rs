//! Error taxonomy for the scoring engine.

use thiserror::Error;

use crate::domain::foundation::DomainError;

use super::validator::ValidationViolation;

/// Arithmetic failures during normalization.
///
/// Validation is expected to prevent these; if one is reached anyway it is
/// fatal for the scoring pass and must never be coerced to NaN, zero, or
/// infinity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    #[error(
        "Cost criterion '{criterion}' has non-positive value {value} at row {row}; \
         cost normalization would divide by it"
    )]
    NonPositiveCostValue {
        criterion: String,
        row: usize,
        value: f64,
    },

    #[error(
        "Benefit criterion '{criterion}' has non-positive column maximum {max}; \
         benefit normalization would divide by it"
    )]
    NonPositiveBenefitMax { criterion: String, max: f64 },
}

/// Failures of a full scoring pass, as surfaced by the application service.
///
/// Validation violations are recoverable and reported as a complete list;
/// arithmetic failures signal a gap between validation and scoring
/// assumptions and are surfaced as internal errors.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Scoring input failed validation with {} violation(s)", .0.len())]
    Validation(Vec<ValidationViolation>),

    #[error("Unexpected arithmetic failure during scoring pass: {0}")]
    Internal(#[from] ArithmeticError),

    #[error("Collaborator failure: {0}")]
    Repository(#[from] DomainError),
}

impl ScoringError {
    /// Returns the validation violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&[ValidationViolation]> {
        match self {
            ScoringError::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_error_names_criterion_and_row() {
        let err = ArithmeticError::NonPositiveCostValue {
            criterion: "Price".to_string(),
            row: 2,
            value: 0.0,
        };

        let message = format!("{}", err);
        assert!(message.contains("Price"));
        assert!(message.contains("row 2"));
    }

    #[test]
    fn scoring_error_reports_violation_count() {
        let err = ScoringError::Validation(vec![ValidationViolation::TooFewCandidates {
            actual: 1,
        }]);

        assert_eq!(format!("{}", err), "Scoring input failed validation with 1 violation(s)");
        assert_eq!(err.violations().map(<[_]>::len), Some(1));
    }

    #[test]
    fn internal_error_is_distinct_from_validation() {
        let err = ScoringError::from(ArithmeticError::NonPositiveBenefitMax {
            criterion: "Quality".to_string(),
            max: 0.0,
        });

        assert!(err.violations().is_none());
        assert!(format!("{}", err).contains("Unexpected arithmetic failure"));
    }
}
