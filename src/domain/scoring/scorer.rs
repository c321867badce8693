//! Weighted aggregation and ranking of normalized candidate values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::candidate::Candidate;
use super::criterion::CriterionSet;
use super::decision_matrix::DecisionMatrix;
use super::errors::ArithmeticError;
use super::normalizer::{NormalizedMatrix, Normalizer};
use super::rounding::round_half_up;

/// Decimal places used for preference scores and breakdown values.
pub const SCORE_SCALE: u32 = 4;

/// Per-criterion contribution to one candidate's preference score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    /// Normalized matrix cell, rounded to `SCORE_SCALE` decimals.
    pub normalized: f64,
    /// Weight x normalized value, rounded to `SCORE_SCALE` decimals.
    pub weighted: f64,
}

/// One candidate's ranked scoring outcome.
///
/// Results are transient: each pass recomputes the full list and supersedes
/// the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub candidate: Candidate,
    /// Total preference score, rounded to `SCORE_SCALE` decimals.
    pub total_score: f64,
    /// 1-based position after sorting by descending score.
    pub rank: u32,
    /// Per-criterion breakdown used for reporting.
    pub breakdown: Vec<CriterionScore>,
    pub computed_at: Timestamp,
}

impl ScoredResult {
    /// Score formatted at the score scale.
    pub fn formatted_score(&self) -> String {
        format!("{:.4}", self.total_score)
    }

    /// Score as a percentage string.
    pub fn score_percentage(&self) -> String {
        format!("{:.2}%", self.total_score * 100.0)
    }

    /// Qualitative label for the rank position.
    pub fn rank_label(&self) -> String {
        match self.rank {
            1 => "Best".to_string(),
            2 => "Excellent".to_string(),
            3 => "Good".to_string(),
            4 => "Fair".to_string(),
            5 => "Poor".to_string(),
            n => format!("Rank {}", n),
        }
    }
}

/// The SAW scorer: builds, normalizes, aggregates, and ranks.
///
/// Stateless; every invocation is one atomic pass over its input. The scorer
/// does not re-validate - callers are expected to run `ScoringValidator`
/// first, and invalid input surfaces as an `ArithmeticError`.
pub struct SawScorer;

impl SawScorer {
    /// Runs a full scoring pass over an ordered candidate snapshot.
    ///
    /// `score[i] = sum_j(weight[j] * normalized[i][j])`, rounded half-up to
    /// `SCORE_SCALE` decimals, sorted descending. The sort is stable, so
    /// exact ties keep candidate input order and still receive distinct
    /// consecutive ranks.
    ///
    /// # Edge Cases
    /// - Empty candidate list: returns an empty result list, not an error
    pub fn score(
        candidates: &[Candidate],
        criteria: &CriterionSet,
    ) -> Result<Vec<ScoredResult>, ArithmeticError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let matrix = DecisionMatrix::from_candidates(candidates, criteria);
        let normalized = Normalizer::normalize(&matrix, criteria)?;
        let mut results = Self::aggregate(candidates, criteria, &normalized);

        results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        for (position, result) in results.iter_mut().enumerate() {
            result.rank = (position + 1) as u32;
        }

        Ok(results)
    }

    /// Computes unranked weighted totals and breakdowns in input order.
    fn aggregate(
        candidates: &[Candidate],
        criteria: &CriterionSet,
        normalized: &NormalizedMatrix,
    ) -> Vec<ScoredResult> {
        let computed_at = Timestamp::now();

        candidates
            .iter()
            .zip(normalized.rows())
            .map(|(candidate, row)| {
                let total: f64 = criteria
                    .iter()
                    .zip(row)
                    .map(|(criterion, &value)| criterion.weight * value)
                    .sum();

                let breakdown = criteria
                    .iter()
                    .zip(row)
                    .map(|(criterion, &value)| CriterionScore {
                        criterion: criterion.name.clone(),
                        normalized: round_half_up(value, SCORE_SCALE),
                        weighted: round_half_up(criterion.weight * value, SCORE_SCALE),
                    })
                    .collect();

                ScoredResult {
                    candidate: candidate.clone(),
                    total_score: round_half_up(total, SCORE_SCALE),
                    rank: 0,
                    breakdown,
                    computed_at,
                }
            })
            .collect()
    }
}
