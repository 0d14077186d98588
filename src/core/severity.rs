use serde::{Deserialize, Serialize};
use std::fmt;

/// Phrases that mark a case as critical whatever its urgency score
const EMERGENCY_KEYWORDS: [&str; 11] = [
    "chest pain",
    "heart attack",
    "stroke",
    "seizure",
    "severe bleeding",
    "difficulty breathing",
    "unconscious",
    "severe pain",
    "suicide",
    "overdose",
    "trauma",
];

/// Triage severity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Classify a case from its symptom text and urgency score
///
/// Any emergency keyword, or urgency of 90+, is critical; 70+ is high;
/// 40+ is moderate.
pub fn assess_severity(symptoms: &str, urgency_score: i32) -> Severity {
    let text = symptoms.to_lowercase();
    let has_emergency = EMERGENCY_KEYWORDS.iter().any(|kw| text.contains(kw));

    if has_emergency || urgency_score >= 90 {
        Severity::Critical
    } else if urgency_score >= 70 {
        Severity::High
    } else if urgency_score >= 40 {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_keyword_overrides_low_urgency() {
        assert_eq!(assess_severity("Sudden CHEST PAIN at rest", 10), Severity::Critical);
    }

    #[test]
    fn test_urgency_bands() {
        assert_eq!(assess_severity("mild rash", 95), Severity::Critical);
        assert_eq!(assess_severity("mild rash", 90), Severity::Critical);
        assert_eq!(assess_severity("mild rash", 70), Severity::High);
        assert_eq!(assess_severity("mild rash", 40), Severity::Moderate);
        assert_eq!(assess_severity("mild rash", 39), Severity::Low);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Moderate > Severity::Low);
    }
}
