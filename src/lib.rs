//! SAW Engine - Product Ranking Decision Support
//!
//! This crate implements the Simple Additive Weighting (SAW) method for
//! ranking candidate products against weighted benefit/cost criteria.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
