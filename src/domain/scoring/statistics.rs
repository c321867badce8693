//! Summary statistics over a ranked result list.

use serde::{Deserialize, Serialize};

use super::scorer::ScoredResult;

/// Derived statistics for a presentation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub candidate_count: usize,
    pub max_score: f64,
    pub min_score: f64,
    pub average_score: f64,
    pub best_candidate: String,
    pub worst_candidate: String,
}

impl ScoreStatistics {
    /// Computes statistics from scored results. None for an empty list.
    ///
    /// Best/worst follow rank, not list position, so the input does not have
    /// to be pre-sorted.
    pub fn from_results(results: &[ScoredResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let best = results.iter().min_by_key(|r| r.rank)?;
        let worst = results.iter().max_by_key(|r| r.rank)?;

        let max_score = results
            .iter()
            .map(|r| r.total_score)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_score = results
            .iter()
            .map(|r| r.total_score)
            .fold(f64::INFINITY, f64::min);
        let total: f64 = results.iter().map(|r| r.total_score).sum();

        Some(Self {
            candidate_count: results.len(),
            max_score,
            min_score,
            average_score: total / results.len() as f64,
            best_candidate: best.candidate.name.clone(),
            worst_candidate: worst.candidate.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::candidate::Candidate;
    use crate::domain::scoring::criterion::CriterionSet;
    use crate::domain::scoring::scorer::SawScorer;

    fn scenario_results() -> Vec<ScoredResult> {
        let candidates = vec![
            Candidate::new("A", "Product A", 10_000_000.0, 80, 70),
            Candidate::new("B", "Product B", 8_000_000.0, 90, 60),
            Candidate::new("C", "Product C", 12_000_000.0, 70, 90),
        ];
        SawScorer::score(&candidates, &CriterionSet::product_default()).unwrap()
    }

    #[test]
    fn statistics_from_ranked_results() {
        let stats = ScoreStatistics::from_results(&scenario_results()).unwrap();

        assert_eq!(stats.candidate_count, 3);
        assert_eq!(stats.max_score, 0.9167);
        assert_eq!(stats.min_score, 0.7889);
        assert_eq!(stats.best_candidate, "Product B");
        assert_eq!(stats.worst_candidate, "Product C");
    }

    #[test]
    fn average_is_mean_of_totals() {
        let stats = ScoreStatistics::from_results(&scenario_results()).unwrap();
        let expected = (0.9167 + 0.8256 + 0.7889) / 3.0;
        assert!((stats.average_score - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_results_yield_none() {
        assert!(ScoreStatistics::from_results(&[]).is_none());
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let mut results = scenario_results();
        results.reverse();

        let stats = ScoreStatistics::from_results(&results).unwrap();
        assert_eq!(stats.best_candidate, "Product B");
        assert_eq!(stats.worst_candidate, "Product C");
    }
}
