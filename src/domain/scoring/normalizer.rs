//! Per-criterion normalization of the decision matrix.

use serde::{Deserialize, Serialize};

use super::criterion::CriterionSet;
use super::decision_matrix::DecisionMatrix;
use super::errors::ArithmeticError;

/// Normalized counterpart of a decision matrix; same shape, values in (0, 1]
/// for non-negative input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    values: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// Number of candidate rows.
    pub fn candidate_count(&self) -> usize {
        self.values.len()
    }

    /// Returns the cell value at (row, column), if present.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the rows as slices.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }
}

/// Applies the SAW normalization rule column by column.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a decision matrix against the criterion table.
    ///
    /// # Rule (per column j)
    /// - Benefit: `normalized[i][j] = raw[i][j] / max_i(raw[i][j])`
    /// - Cost: `normalized[i][j] = min_i(raw[i][j]) / raw[i][j]`
    ///
    /// # Edge Cases
    /// - Empty matrix: returns an empty normalized matrix
    /// - All values in a column equal: every cell normalizes to 1.0
    /// - Non-positive value in a cost column, or non-positive maximum in a
    ///   benefit column: `ArithmeticError`, never a silent NaN or infinity
    pub fn normalize(
        matrix: &DecisionMatrix,
        criteria: &CriterionSet,
    ) -> Result<NormalizedMatrix, ArithmeticError> {
        if matrix.is_empty() {
            return Ok(NormalizedMatrix::default());
        }

        let mut values = vec![vec![0.0; criteria.len()]; matrix.candidate_count()];

        for (column, criterion) in criteria.iter().enumerate() {
            if criterion.polarity.is_benefit() {
                let max = matrix.column_max(column).unwrap_or(0.0);
                if max <= 0.0 {
                    return Err(ArithmeticError::NonPositiveBenefitMax {
                        criterion: criterion.name.clone(),
                        max,
                    });
                }
                for (row, matrix_row) in matrix.rows().iter().enumerate() {
                    values[row][column] = matrix_row[column] / max;
                }
            } else {
                let min = matrix.column_min(column).unwrap_or(0.0);
                for (row, matrix_row) in matrix.rows().iter().enumerate() {
                    let raw = matrix_row[column];
                    if raw <= 0.0 {
                        return Err(ArithmeticError::NonPositiveCostValue {
                            criterion: criterion.name.clone(),
                            row,
                            value: raw,
                        });
                    }
                    values[row][column] = min / raw;
                }
            }
        }

        Ok(NormalizedMatrix { values })
    }
}
