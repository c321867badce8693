//! Calculation report - the transparency artifact behind a scoring pass.
//!
//! Bundles the intermediate matrices alongside the ranked results so a
//! presentation collaborator can render the full derivation, not just the
//! final ordering.

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::criterion::CriterionSet;
use super::decision_matrix::DecisionMatrix;
use super::errors::ArithmeticError;
use super::normalizer::{NormalizedMatrix, Normalizer};
use super::scorer::{SawScorer, ScoredResult};

/// Criterion row for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionInfo {
    pub name: String,
    pub weight: f64,
    pub polarity: String,
    pub description: Option<String>,
}

/// Everything a report renderer needs from one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub candidates: Vec<Candidate>,
    pub criteria: CriterionSet,
    pub decision_matrix: DecisionMatrix,
    pub normalized_matrix: NormalizedMatrix,
    pub results: Vec<ScoredResult>,
}

impl CalculationReport {
    /// Runs the scoring pipeline and captures every intermediate stage.
    ///
    /// Like the scorer, assumes validated input and propagates arithmetic
    /// failures. An empty candidate list produces an empty report.
    pub fn build(
        candidates: &[Candidate],
        criteria: &CriterionSet,
    ) -> Result<Self, ArithmeticError> {
        let decision_matrix = DecisionMatrix::from_candidates(candidates, criteria);
        let normalized_matrix = Normalizer::normalize(&decision_matrix, criteria)?;
        let results = SawScorer::score(candidates, criteria)?;

        Ok(Self {
            candidates: candidates.to_vec(),
            criteria: criteria.clone(),
            decision_matrix,
            normalized_matrix,
            results,
        })
    }

    /// Decision matrix as display rows: candidate code, price with two
    /// decimals, then the integer scores.
    pub fn decision_matrix_rows(&self) -> Vec<Vec<String>> {
        self.candidates
            .iter()
            .zip(self.decision_matrix.rows())
            .map(|(candidate, row)| {
                let mut display = vec![candidate.code.clone()];
                for (column, criterion) in self.criteria.iter().enumerate() {
                    let value = row.get(column).copied().unwrap_or(0.0);
                    if criterion.polarity.is_benefit() {
                        display.push(format!("{:.0}", value));
                    } else {
                        display.push(format!("{:.2}", value));
                    }
                }
                display
            })
            .collect()
    }

    /// Normalized matrix as display rows: candidate code, then each cell
    /// with four decimals.
    pub fn normalized_matrix_rows(&self) -> Vec<Vec<String>> {
        self.candidates
            .iter()
            .zip(self.normalized_matrix.rows())
            .map(|(candidate, row)| {
                let mut display = vec![candidate.code.clone()];
                display.extend(row.iter().map(|value| format!("{:.4}", value)));
                display
            })
            .collect()
    }

    /// The criterion table for display.
    pub fn criteria_info(&self) -> Vec<CriterionInfo> {
        self.criteria
            .iter()
            .map(|criterion| CriterionInfo {
                name: criterion.name.clone(),
                weight: criterion.weight,
                polarity: criterion.polarity.label().to_string(),
                description: criterion.description.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("A", "Product A", 10_000_000.0, 80, 70),
            Candidate::new("B", "Product B", 8_000_000.0, 90, 60),
            Candidate::new("C", "Product C", 12_000_000.0, 70, 90),
        ]
    }

    fn scenario_report() -> CalculationReport {
        CalculationReport::build(&scenario_candidates(), &CriterionSet::product_default()).unwrap()
    }

    #[test]
    fn report_captures_all_stages() {
        let report = scenario_report();

        assert_eq!(report.candidates.len(), 3);
        assert_eq!(report.decision_matrix.candidate_count(), 3);
        assert_eq!(report.normalized_matrix.candidate_count(), 3);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn decision_rows_format_price_and_scores() {
        let rows = scenario_report().decision_matrix_rows();

        assert_eq!(rows[0], vec!["A", "10000000.00", "80", "70"]);
        assert_eq!(rows[1], vec!["B", "8000000.00", "90", "60"]);
    }

    #[test]
    fn normalized_rows_use_four_decimals() {
        let rows = scenario_report().normalized_matrix_rows();

        assert_eq!(rows[0], vec!["A", "0.8000", "0.8889", "0.7778"]);
        assert_eq!(rows[1], vec!["B", "1.0000", "1.0000", "0.6667"]);
        assert_eq!(rows[2], vec!["C", "0.6667", "0.7778", "1.0000"]);
    }

    #[test]
    fn criteria_info_lists_table_in_order() {
        let info = scenario_report().criteria_info();

        assert_eq!(info.len(), 3);
        assert_eq!(info[0].name, "Price");
        assert_eq!(info[0].polarity, "Cost");
        assert_eq!(info[1].name, "Quality");
        assert_eq!(info[1].polarity, "Benefit");
        assert_eq!(info[2].weight, 0.25);
    }

    #[test]
    fn empty_candidates_build_empty_report() {
        let report =
            CalculationReport::build(&[], &CriterionSet::product_default()).unwrap();

        assert!(report.results.is_empty());
        assert!(report.decision_matrix_rows().is_empty());
        assert!(report.normalized_matrix_rows().is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let json = serde_json::to_string(&scenario_report()).unwrap();
        assert!(json.contains("decision_matrix"));
        assert!(json.contains("normalized_matrix"));
        assert!(json.contains("results"));
    }
}
