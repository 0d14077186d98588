use crate::core::{
    explanation::collect_reasons, inference::mentions_related_keyword, slots::has_exact_slot,
};
use crate::models::{
    MatchQuality, PatientCase, ProviderCandidate, ScoreBreakdown, SlotMatch, Specialty,
    SubspecialtyMatch,
};

/// Highest total the eight factors can add up to (a pediatric case with a
/// pediatric provider)
pub const MAX_TOTAL_SCORE: f64 = 180.0;

/// Ceiling for adults aged 18-64, who never earn the age-appropriate bonus
pub const ADULT_MAX_TOTAL_SCORE: f64 = 170.0;

/// Experience beyond this many years earns nothing extra
const EXPERIENCE_CAP_YEARS: u32 = 30;

/// Score one candidate against one case
///
/// Eight additive factors:
/// ```text
/// slot availability       0 / 20 / 40 / 60
/// language match          0 / 25
/// rating                  0 - 20     (rating / 5 * 20)
/// experience              0 - 15     (min(years, 30) / 30 * 15)
/// sub-specialty match     0 / 15 / 30
/// awards                  0 / 10
/// age-appropriate care    0 / 5 / 10
/// urgency-experience      0 / 10
/// ```
/// Inputs are scored as given: an out-of-range urgency or rating is not
/// clamped and can push the total past [`MAX_TOTAL_SCORE`] or below zero.
pub fn score_candidate(
    case: &PatientCase,
    candidate: &ProviderCandidate,
    subspecialty_hint: Option<&str>,
) -> ScoreBreakdown {
    let (slot, slot_match) = slot_score(
        &case.preferred_slot,
        &candidate.available_slots,
        case.urgency_score,
    );
    let language = language_score(&case.preferred_language, &candidate.languages_spoken);
    let rating = rating_score(candidate.rating);
    let experience = experience_score(candidate.experience_years);
    let (subspecialty, subspecialty_match) = subspecialty_score(
        case.specialty,
        &candidate.sub_specialization,
        subspecialty_hint,
    );
    let awards = awards_score(&candidate.awards);
    let age_appropriate = age_appropriate_score(
        case.age,
        &candidate.sub_specialization,
        candidate.experience_years,
    );
    let urgency_experience =
        urgency_experience_score(case.urgency_score, candidate.experience_years);

    let total = slot
        + language
        + rating
        + experience
        + subspecialty
        + awards
        + age_appropriate
        + urgency_experience;

    let mut breakdown = ScoreBreakdown {
        slot,
        language,
        rating,
        experience,
        subspecialty,
        awards,
        age_appropriate,
        urgency_experience,
        total,
        match_quality: MatchQuality::from_total(total),
        slot_match,
        subspecialty_match,
        reasons: Vec::new(),
    };
    breakdown.reasons = collect_reasons(candidate, &breakdown);

    breakdown
}

/// Highest total reachable for a patient of the given age with in-range inputs
pub fn max_total_for_age(age: u32) -> f64 {
    ADULT_MAX_TOTAL_SCORE + age_appropriate_score(age, "pediatric", u32::MAX)
}

/// Slot availability: 40 for the exact preferred slot, +20 on top of that
/// when urgency is 90 or more; 20 for any other open slot; 0 when fully booked
#[inline]
pub fn slot_score(preferred: &str, available: &[String], urgency_score: i32) -> (f64, SlotMatch) {
    if has_exact_slot(preferred, available) {
        let bonus = if urgency_score >= 90 { 20.0 } else { 0.0 };
        (40.0 + bonus, SlotMatch::Exact)
    } else if !available.is_empty() {
        (20.0, SlotMatch::Alternative)
    } else {
        (0.0, SlotMatch::None)
    }
}

/// Language match (0 or 25), case-insensitive
#[inline]
pub fn language_score(preferred: &str, spoken: &[String]) -> f64 {
    let preferred = preferred.trim().to_lowercase();
    if spoken.iter().any(|lang| lang.trim().to_lowercase() == preferred) {
        25.0
    } else {
        0.0
    }
}

/// Rating contribution (0-20), linear in the 0-5 rating
#[inline]
pub fn rating_score(rating: f64) -> f64 {
    (rating / 5.0) * 20.0
}

/// Experience contribution (0-15), flat beyond 30 years
#[inline]
pub fn experience_score(experience_years: u32) -> f64 {
    f64::from(experience_years.min(EXPERIENCE_CAP_YEARS)) / f64::from(EXPERIENCE_CAP_YEARS) * 15.0
}

/// Sub-specialty alignment
///
/// 30 when the inferred hint appears in the provider's focus area, 15 when
/// only a related keyword does, 0 otherwise. An empty hint is no hint.
#[inline]
pub fn subspecialty_score(
    specialty: Specialty,
    sub_specialization: &str,
    hint: Option<&str>,
) -> (f64, SubspecialtyMatch) {
    let focus = sub_specialization.to_lowercase();

    if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
        if focus.contains(&hint.to_lowercase()) {
            return (30.0, SubspecialtyMatch::Strong);
        }
    }

    if mentions_related_keyword(specialty, &focus) {
        (15.0, SubspecialtyMatch::Related)
    } else {
        (0.0, SubspecialtyMatch::None)
    }
}

/// Awards (0 or 10), regardless of how many
#[inline]
pub fn awards_score(awards: &[String]) -> f64 {
    if awards.is_empty() {
        0.0
    } else {
        10.0
    }
}

/// Age-appropriate care
///
/// Children (under 18) earn 10 with a pediatric provider; seniors (65+) earn
/// 5 with 10 or more years of experience; other adults earn nothing.
#[inline]
pub fn age_appropriate_score(age: u32, sub_specialization: &str, experience_years: u32) -> f64 {
    if age < 18 {
        if sub_specialization.to_lowercase().contains("pediatric") {
            10.0
        } else {
            0.0
        }
    } else if age >= 65 {
        if experience_years >= 10 {
            5.0
        } else {
            0.0
        }
    } else {
        0.0
    }
}

/// Urgency-experience alignment (0 or 10)
///
/// Either condition grants the full 10; they do not stack.
#[inline]
pub fn urgency_experience_score(urgency_score: i32, experience_years: u32) -> f64 {
    let critical_and_senior = urgency_score >= 90 && experience_years >= 20;
    let urgent_and_seasoned = urgency_score >= 70 && experience_years >= 10;

    if critical_and_senior || urgent_and_seasoned {
        10.0
    } else {
        0.0
    }
}
