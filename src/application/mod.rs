//! Application layer - orchestration of scoring passes.
//!
//! Coordinates the domain engine with the candidate-reader and
//! result-repository ports. The domain itself stays pure and synchronous;
//! this layer owns the async boundary and the structured logging.

mod scoring_service;

pub use scoring_service::ScoringService;
