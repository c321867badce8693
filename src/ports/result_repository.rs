//! Result Repository Port - the persistence collaborator boundary.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::scoring::ScoredResult;

/// Port for persisting ranked scoring results.
///
/// # Contract
///
/// - `replace_all` atomically supersedes whatever the previous pass stored;
///   readers never observe a mix of old and new results
/// - Results are pass-scoped: there is no merging or partial update
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Replaces all stored results with the given ranked list.
    async fn replace_all(&self, results: &[ScoredResult]) -> Result<(), DomainError>;

    /// Returns the currently stored results in rank order.
    async fn find_all(&self) -> Result<Vec<ScoredResult>, DomainError>;
}
