//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the scoring engine and the outside world. Adapters implement these ports.
//!
//! - `CandidateReader` - supplies the candidate snapshot for a pass
//! - `ResultRepository` - stores ranked results, replacing the previous pass

mod candidate_reader;
mod result_repository;

pub use candidate_reader::CandidateReader;
pub use result_repository::ResultRepository;
