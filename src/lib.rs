//! Doctor Match - multi-factor doctor matching engine for patient triage
//!
//! This library ranks a specialty-scoped pool of providers against one
//! patient case and explains the pick. The core (`core`) is pure and has no
//! dependency on configuration; `services` wraps it for batch runs.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{infer_subspecialty, rank, score_candidate, Matcher, MatcherOptions};
pub use error::MatchError;
pub use models::{
    MatchQuality, MatchResult, PatientCase, ProviderCandidate, ScoreBreakdown, Specialty,
};
