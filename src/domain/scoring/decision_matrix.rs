//! Decision matrix - raw per-candidate, per-criterion values.

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::criterion::CriterionSet;

/// Raw numeric table of shape `[candidates][criteria]`, in the criterion
/// set's column order. Row order preserves candidate input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds the matrix from an ordered candidate list.
    ///
    /// Pure transformation: each row pulls the attribute named by the
    /// corresponding criterion column. An empty candidate list yields an
    /// empty matrix.
    pub fn from_candidates(candidates: &[Candidate], criteria: &CriterionSet) -> Self {
        let values = candidates
            .iter()
            .map(|candidate| {
                criteria
                    .iter()
                    .map(|criterion| candidate.attribute_value(criterion.attribute))
                    .collect()
            })
            .collect();

        Self { values }
    }

    /// Creates a matrix directly from row data (tests and reconstitution).
    pub fn from_rows(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }

    /// Number of candidate rows.
    pub fn candidate_count(&self) -> usize {
        self.values.len()
    }

    /// Number of criterion columns (0 for an empty matrix).
    pub fn criterion_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the cell value at (row, column), if present.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the rows as slices.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Maximum value in a column. None for an empty matrix or missing column.
    pub fn column_max(&self, column: usize) -> Option<f64> {
        self.values
            .iter()
            .filter_map(|row| row.get(column).copied())
            .reduce(f64::max)
    }

    /// Minimum value in a column. None for an empty matrix or missing column.
    pub fn column_min(&self, column: usize) -> Option<f64> {
        self.values
            .iter()
            .filter_map(|row| row.get(column).copied())
            .reduce(f64::min)
    }
}
