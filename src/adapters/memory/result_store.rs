//! In-memory result store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::scoring::ScoredResult;
use crate::ports::ResultRepository;

/// In-memory result set with replace-all semantics.
///
/// A single write-lock swap makes the replacement atomic: readers observe
/// either the previous pass or the new one, never a mix.
#[derive(Default)]
pub struct InMemoryResultStore {
    results: RwLock<Vec<ScoredResult>>,
}

impl InMemoryResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results.
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    /// Returns true if no results are stored.
    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultStore {
    async fn replace_all(&self, results: &[ScoredResult]) -> Result<(), DomainError> {
        *self.results.write().await = results.to_vec();
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ScoredResult>, DomainError> {
        Ok(self.results.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{Candidate, CriterionSet, SawScorer};

    fn ranked_results() -> Vec<ScoredResult> {
        let candidates = vec![
            Candidate::new("A", "Product A", 10_000_000.0, 80, 70),
            Candidate::new("B", "Product B", 8_000_000.0, 90, 60),
        ];
        SawScorer::score(&candidates, &CriterionSet::product_default()).unwrap()
    }

    #[tokio::test]
    async fn replace_all_stores_results() {
        let store = InMemoryResultStore::new();
        let results = ranked_results();

        store.replace_all(&results).await.unwrap();

        let stored = store.find_all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].rank, 1);
    }

    #[tokio::test]
    async fn replace_all_supersedes_previous_results() {
        let store = InMemoryResultStore::new();
        store.replace_all(&ranked_results()).await.unwrap();

        let second = vec![ranked_results().remove(0)];
        store.replace_all(&second).await.unwrap();

        let stored = store.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn replace_all_with_empty_clears_store() {
        let store = InMemoryResultStore::new();
        store.replace_all(&ranked_results()).await.unwrap();
        store.replace_all(&[]).await.unwrap();

        assert!(store.is_empty().await);
    }
}
