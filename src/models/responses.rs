use serde::{Deserialize, Serialize};

use crate::core::severity::Severity;
use crate::models::domain::{MatchQuality, MatchResult, Specialty};

/// Report for a whole batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total_cases: usize,
    pub matched: usize,
    pub outcomes: Vec<CaseOutcome>,
}

/// Per-case outcome; exactly one of `result` and `error` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub patient: Option<String>,
    pub specialty: Specialty,
    pub severity: Severity,
    pub preparation: Vec<String>,
    pub result: Option<MatchResult>,
    /// Best first, headed by the candidate in `result`
    pub shortlist: Vec<ShortlistEntry>,
    pub error: Option<String>,
}

/// One row of the ranked shortlist; the first row is the winning match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistEntry {
    pub name: String,
    pub total: f64,
    pub match_quality: MatchQuality,
}
