// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    MatchQuality, MatchReason, MatchResult, PatientCase, ProviderCandidate, ScoreBreakdown,
    ScoredCandidate, SlotMatch, Specialty, SubspecialtyMatch,
};
pub use requests::{BatchRequest, Department, ProviderDirectory};
pub use responses::{BatchReport, CaseOutcome, ShortlistEntry};
