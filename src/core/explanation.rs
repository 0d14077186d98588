use crate::models::{MatchReason, ProviderCandidate, ScoreBreakdown, SlotMatch, SubspecialtyMatch};

/// Experience (in years) worth calling out in an explanation
pub const NOTABLE_EXPERIENCE_YEARS: u32 = 15;

/// Rating worth calling out in an explanation
pub const NOTABLE_RATING: f64 = 4.5;

/// Collect the notable reasons behind a breakdown, in explanation order:
/// slot, language, sub-specialty, experience, rating, awards, urgency.
///
/// Factors that scored without crossing their notable threshold (an
/// alternative slot, a related-only sub-specialty, a 4.2 rating) are left out.
pub fn collect_reasons(
    candidate: &ProviderCandidate,
    breakdown: &ScoreBreakdown,
) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    if breakdown.slot_match == SlotMatch::Exact {
        reasons.push(MatchReason::ExactSlot {
            priority: breakdown.slot > 40.0,
        });
    }

    if breakdown.language > 0.0 {
        reasons.push(MatchReason::LanguageMatch);
    }

    if breakdown.subspecialty_match == SubspecialtyMatch::Strong {
        reasons.push(MatchReason::SubspecialtyExpertise);
    }

    if candidate.experience_years >= NOTABLE_EXPERIENCE_YEARS {
        reasons.push(MatchReason::Experienced {
            years: candidate.experience_years,
        });
    }

    if candidate.rating >= NOTABLE_RATING {
        reasons.push(MatchReason::HighRating {
            rating: candidate.rating,
        });
    }

    if breakdown.awards > 0.0 {
        reasons.push(MatchReason::Awards);
    }

    if breakdown.urgency_experience > 0.0 {
        reasons.push(MatchReason::UrgencyExperience);
    }

    reasons
}

/// Render the reasons as a single sentence
///
/// ```text
/// Dr. A was matched to Ravi because: speaks patient's preferred language,
///     recognized with professional awards.
/// ```
pub fn render_explanation(
    provider_name: &str,
    patient_name: Option<&str>,
    reasons: &[MatchReason],
) -> String {
    let subject = match patient_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(patient) => format!("{} was matched to {}", provider_name, patient),
        None => format!("{} was matched", provider_name),
    };

    if reasons.is_empty() {
        return format!("{} based on specialty alignment.", subject);
    }

    let clauses: Vec<String> = reasons.iter().map(ToString::to_string).collect();
    format!("{} because: {}.", subject, clauses.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_patient_name() {
        let text = render_explanation(
            "Dr. Mehta",
            Some("Ravi"),
            &[MatchReason::LanguageMatch, MatchReason::Awards],
        );
        assert_eq!(
            text,
            "Dr. Mehta was matched to Ravi because: speaks patient's preferred language, \
             recognized with professional awards."
        );
    }

    #[test]
    fn test_render_without_patient_name() {
        let text = render_explanation(
            "Dr. Rao",
            None,
            &[MatchReason::Experienced { years: 22 }],
        );
        assert_eq!(text, "Dr. Rao was matched because: highly experienced (22 years).");
    }

    #[test]
    fn test_render_fallback() {
        assert_eq!(
            render_explanation("Dr. Rao", Some("  "), &[]),
            "Dr. Rao was matched based on specialty alignment."
        );
    }

    #[test]
    fn test_rating_clause_formatting() {
        let text = render_explanation("Dr. Rao", None, &[MatchReason::HighRating { rating: 4.9 }]);
        assert_eq!(text, "Dr. Rao was matched because: excellent patient rating (4.9/5.0).");
    }

    #[test]
    fn test_rating_clause_is_not_rounded() {
        let text = render_explanation("Dr. Rao", None, &[MatchReason::HighRating { rating: 4.96 }]);
        assert_eq!(text, "Dr. Rao was matched because: excellent patient rating (4.96/5.0).");

        let text = render_explanation("Dr. Rao", None, &[MatchReason::HighRating { rating: 4.55 }]);
        assert_eq!(text, "Dr. Rao was matched because: excellent patient rating (4.55/5.0).");
    }
}
