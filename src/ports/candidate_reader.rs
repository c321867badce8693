//! Candidate Reader Port - the data-access collaborator boundary.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::scoring::Candidate;

/// Port for loading the candidate set.
///
/// # Contract
///
/// - `find_all` returns the full candidate set in a stable order; that order
///   is the ranking tie-break, so implementations must not reorder between
///   calls with unchanged data
/// - The engine reads a fresh snapshot at the start of every scoring pass
///   and never caches across passes
#[async_trait]
pub trait CandidateReader: Send + Sync {
    /// Loads the current ordered candidate set.
    async fn find_all(&self) -> Result<Vec<Candidate>, DomainError>;
}
