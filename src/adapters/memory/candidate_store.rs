//! In-memory candidate store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CandidateId, DomainError};
use crate::domain::scoring::Candidate;
use crate::ports::CandidateReader;

/// In-memory candidate set preserving insertion order.
///
/// Insertion order is what the ranking tie-break sees, so the store never
/// reorders entries.
#[derive(Default)]
pub struct InMemoryCandidateStore {
    candidates: RwLock<Vec<Candidate>>,
}

impl InMemoryCandidateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with candidates.
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: RwLock::new(candidates),
        }
    }

    /// Appends a candidate.
    pub async fn insert(&self, candidate: Candidate) {
        self.candidates.write().await.push(candidate);
    }

    /// Removes a candidate by id. Returns true if one was removed.
    pub async fn remove(&self, id: &CandidateId) -> bool {
        let mut candidates = self.candidates.write().await;
        let before = candidates.len();
        candidates.retain(|c| c.id != *id);
        candidates.len() != before
    }

    /// Number of stored candidates.
    pub async fn len(&self) -> usize {
        self.candidates.read().await.len()
    }

    /// Returns true if the store holds no candidates.
    pub async fn is_empty(&self) -> bool {
        self.candidates.read().await.is_empty()
    }
}

#[async_trait]
impl CandidateReader for InMemoryCandidateStore {
    async fn find_all(&self) -> Result<Vec<Candidate>, DomainError> {
        Ok(self.candidates.read().await.clone())
    }
}
