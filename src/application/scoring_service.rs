//! ScoringService - one atomic SAW pass from snapshot to persisted ranking.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::scoring::{
    CalculationReport, Candidate, CriterionSet, SawScorer, ScoreStatistics, ScoredResult,
    ScoringError, ScoringValidator, ValidationViolation,
};
use crate::ports::{CandidateReader, ResultRepository};

/// Orchestrates scoring passes against a fixed criterion table.
///
/// Stateless across invocations: every pass reads a fresh candidate
/// snapshot, recomputes everything, and atomically replaces the persisted
/// results. Concurrent passes over different snapshots are safe because no
/// state is shared between calls.
pub struct ScoringService {
    reader: Arc<dyn CandidateReader>,
    repository: Arc<dyn ResultRepository>,
    criteria: CriterionSet,
}

impl ScoringService {
    /// Creates a service with an explicit criterion table.
    pub fn new(
        reader: Arc<dyn CandidateReader>,
        repository: Arc<dyn ResultRepository>,
        criteria: CriterionSet,
    ) -> Self {
        Self {
            reader,
            repository,
            criteria,
        }
    }

    /// Creates a service with the fixed product criterion table.
    pub fn with_product_criteria(
        reader: Arc<dyn CandidateReader>,
        repository: Arc<dyn ResultRepository>,
    ) -> Self {
        Self::new(reader, repository, CriterionSet::product_default())
    }

    /// Returns the criterion table this service scores against.
    pub fn criteria(&self) -> &CriterionSet {
        &self.criteria
    }

    /// Validates the current candidate snapshot without scoring.
    ///
    /// Returns the complete violation list; empty means a pass may run.
    pub async fn validate(&self) -> Result<Vec<ValidationViolation>, ScoringError> {
        let candidates = self.reader.find_all().await?;
        Ok(ScoringValidator::validate(&candidates, &self.criteria))
    }

    /// Runs one full scoring pass: read fresh -> validate -> score -> persist.
    ///
    /// An empty candidate set is a valid, trivial outcome: the stored results
    /// are cleared and an empty list is returned. Validation violations abort
    /// the pass before any computation; an arithmetic failure slipping past
    /// validation aborts it as an internal error and leaves the previously
    /// persisted results untouched.
    pub async fn run_scoring_pass(&self) -> Result<Vec<ScoredResult>, ScoringError> {
        let candidates = self.reader.find_all().await?;
        debug!(candidate_count = candidates.len(), "loaded candidate snapshot");

        if candidates.is_empty() {
            info!("no candidates to score; clearing stored results");
            self.repository.replace_all(&[]).await?;
            return Ok(Vec::new());
        }

        let violations = ScoringValidator::validate(&candidates, &self.criteria);
        if !violations.is_empty() {
            warn!(violation_count = violations.len(), "scoring pass rejected");
            return Err(ScoringError::Validation(violations));
        }

        let results = SawScorer::score(&candidates, &self.criteria)?;
        self.repository.replace_all(&results).await?;

        info!(
            result_count = results.len(),
            best = results.first().map(|r| r.candidate.code.as_str()).unwrap_or(""),
            "scoring pass complete"
        );
        Ok(results)
    }

    /// Builds the full calculation report for the current snapshot without
    /// persisting anything.
    pub async fn calculation_report(&self) -> Result<CalculationReport, ScoringError> {
        let candidates = self.reader.find_all().await?;

        let violations = ScoringValidator::validate(&candidates, &self.criteria);
        if !violations.is_empty() {
            return Err(ScoringError::Validation(violations));
        }

        Ok(CalculationReport::build(&candidates, &self.criteria)?)
    }

    /// Summary statistics over a fresh scoring pass. None when there are no
    /// candidates.
    pub async fn statistics(&self) -> Result<Option<ScoreStatistics>, ScoringError> {
        let results = self.run_scoring_pass().await?;
        Ok(ScoreStatistics::from_results(&results))
    }

    /// Scores an explicit snapshot with this service's criteria, bypassing
    /// the reader and repository. Useful for what-could-be comparisons on
    /// data the caller already holds.
    pub fn score_snapshot(
        &self,
        candidates: &[Candidate],
    ) -> Result<Vec<ScoredResult>, ScoringError> {
        let violations = ScoringValidator::validate(candidates, &self.criteria);
        if !violations.is_empty() {
            return Err(ScoringError::Validation(violations));
        }
        Ok(SawScorer::score(candidates, &self.criteria)?)
    }
}
