use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::core::{
    explanation::render_explanation, inference::infer_for_case, scoring::score_candidate,
};
use crate::error::MatchError;
use crate::models::{MatchResult, PatientCase, ProviderCandidate, ScoredCandidate};

/// Pool size from which candidates are scored on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Tuning knobs for a [`Matcher`]
///
/// None of these change which candidate wins; they only affect how the
/// work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherOptions {
    pub parallel_threshold: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Ranks a candidate pool against one patient case
///
/// # Pipeline Stages
/// 1. Sub-specialty inference (once per run)
/// 2. Per-candidate scoring (parallel for large pools)
/// 3. Selection: highest total, then highest rating, then input order
/// 4. Explanation rendering for the winner
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatcherOptions,
}

impl Matcher {
    pub fn new(options: MatcherOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self::default()
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Pick the best-fitting provider for a case
    ///
    /// # Errors
    /// [`MatchError::EmptyCandidatePool`] when `candidates` is empty.
    pub fn rank(
        &self,
        case: &PatientCase,
        candidates: &[ProviderCandidate],
    ) -> Result<MatchResult, MatchError> {
        if candidates.is_empty() {
            return Err(MatchError::EmptyCandidatePool(case.specialty));
        }

        let hint = infer_for_case(case);
        let scored = self.score_all(case, candidates, hint);

        let best = scored
            .into_iter()
            .reduce(|best, next| {
                if compare_candidates(&next, &best) == Ordering::Greater {
                    next
                } else {
                    best
                }
            })
            .ok_or(MatchError::EmptyCandidatePool(case.specialty))?;

        Ok(build_result(case, best, hint, candidates.len()))
    }

    /// Score every candidate and return them best first, truncated to `limit`
    ///
    /// Ordering is the same rule [`Matcher::rank`] uses, so the head of a
    /// non-empty shortlist is always the ranked winner.
    pub fn shortlist(
        &self,
        case: &PatientCase,
        candidates: &[ProviderCandidate],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        let hint = infer_for_case(case);
        let mut scored = self.ranked(case, candidates, hint);
        scored.truncate(limit);
        scored
    }

    /// [`Matcher::rank`] and [`Matcher::shortlist`] from a single inference
    /// and scoring pass
    ///
    /// # Errors
    /// [`MatchError::EmptyCandidatePool`] when `candidates` is empty.
    pub fn rank_with_shortlist(
        &self,
        case: &PatientCase,
        candidates: &[ProviderCandidate],
        limit: usize,
    ) -> Result<(MatchResult, Vec<ScoredCandidate>), MatchError> {
        let hint = infer_for_case(case);
        let mut scored = self.ranked(case, candidates, hint);

        let best = scored
            .first()
            .cloned()
            .ok_or(MatchError::EmptyCandidatePool(case.specialty))?;

        scored.truncate(limit);
        Ok((build_result(case, best, hint, candidates.len()), scored))
    }

    /// Score the pool and sort it best first
    fn ranked(
        &self,
        case: &PatientCase,
        candidates: &[ProviderCandidate],
        hint: Option<&str>,
    ) -> Vec<ScoredCandidate> {
        let mut scored = self.score_all(case, candidates, hint);

        // stable sort keeps input order for full ties
        scored.sort_by(|a, b| compare_candidates(b, a));
        scored
    }

    /// Score the pool in input order
    fn score_all(
        &self,
        case: &PatientCase,
        candidates: &[ProviderCandidate],
        hint: Option<&str>,
    ) -> Vec<ScoredCandidate> {
        let score_one = |candidate: &ProviderCandidate| ScoredCandidate {
            breakdown: score_candidate(case, candidate, hint),
            candidate: candidate.clone(),
        };

        if candidates.len() >= self.options.parallel_threshold {
            debug!("Scoring {} candidates in parallel", candidates.len());
            candidates.par_iter().map(score_one).collect()
        } else {
            debug!("Scoring {} candidates", candidates.len());
            candidates.iter().map(score_one).collect()
        }
    }
}

fn build_result(
    case: &PatientCase,
    best: ScoredCandidate,
    hint: Option<&str>,
    candidates_evaluated: usize,
) -> MatchResult {
    let explanation = render_explanation(
        &best.candidate.name,
        case.name.as_deref(),
        &best.breakdown.reasons,
    );

    info!(
        "Matched {} for {} case (score: {:.2}, quality: {})",
        best.candidate.name, case.specialty, best.breakdown.total, best.breakdown.match_quality
    );

    MatchResult {
        candidate: best.candidate,
        breakdown: best.breakdown,
        explanation,
        subspecialty_hint: hint.map(str::to_string),
        candidates_evaluated,
    }
}

/// Rank with default options
pub fn rank(
    case: &PatientCase,
    candidates: &[ProviderCandidate],
) -> Result<MatchResult, MatchError> {
    Matcher::with_default_options().rank(case, candidates)
}

/// `Greater` when `a` should be preferred over `b`: higher total, then
/// higher rating. Full ties compare `Equal`; callers keep the earlier one.
fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.breakdown
        .total
        .partial_cmp(&b.breakdown.total)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.candidate
                .rating
                .partial_cmp(&b.candidate.rating)
                .unwrap_or(Ordering::Equal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchQuality, Specialty};

    fn create_case(urgency_score: i32) -> PatientCase {
        PatientCase {
            name: Some("Asha".to_string()),
            age: 58,
            symptoms: "crushing chest pain radiating to left arm, sweating".to_string(),
            specialty: Specialty::Cardiology,
            urgency_score,
            preferred_language: "Hindi".to_string(),
            preferred_slot: "10:00".to_string(),
            pre_existing_conditions: vec![],
        }
    }

    fn create_candidate(name: &str, experience_years: u32, rating: f64) -> ProviderCandidate {
        ProviderCandidate {
            name: name.to_string(),
            experience_years,
            sub_specialization: "General Medicine".to_string(),
            languages_spoken: vec!["English".to_string()],
            rating,
            available_slots: vec!["09:00".to_string()],
            awards: vec![],
        }
    }

    #[test]
    fn test_rank_picks_highest_total() {
        let matcher = Matcher::with_default_options();
        let case = create_case(50);

        let candidates = vec![
            create_candidate("Dr. Low", 2, 3.0),
            create_candidate("Dr. High", 28, 4.8),
            create_candidate("Dr. Mid", 12, 4.0),
        ];

        let result = matcher.rank(&case, &candidates).unwrap();

        assert_eq!(result.candidate.name, "Dr. High");
        assert_eq!(result.candidates_evaluated, 3);
        assert_eq!(result.subspecialty_hint.as_deref(), Some("Interventional"));
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let matcher = Matcher::with_default_options();
        let result = matcher.rank(&create_case(50), &[]);

        assert_eq!(result, Err(MatchError::EmptyCandidatePool(Specialty::Cardiology)));
    }

    #[test]
    fn test_tie_on_total_prefers_rating() {
        let matcher = Matcher::with_default_options();
        let case = create_case(50);

        // 30 years at 1.25 vs no experience at 5.0: both total 40
        let first = create_candidate("Dr. First", 30, 1.25);
        let second = create_candidate("Dr. Second", 0, 5.0);
        assert_eq!(score_candidate(&case, &first, None).total, 40.0);
        assert_eq!(score_candidate(&case, &second, None).total, 40.0);

        let result = matcher.rank(&case, &[first, second]).unwrap();

        assert_eq!(result.candidate.name, "Dr. Second");
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let matcher = Matcher::with_default_options();
        let case = create_case(50);

        let candidates = vec![
            create_candidate("Dr. A", 10, 4.0),
            create_candidate("Dr. B", 10, 4.0),
        ];

        let result = matcher.rank(&case, &candidates).unwrap();
        assert_eq!(result.candidate.name, "Dr. A");

        let shortlist = matcher.shortlist(&case, &candidates, 10);
        assert_eq!(shortlist[0].candidate.name, "Dr. A");
        assert_eq!(shortlist[1].candidate.name, "Dr. B");
    }

    #[test]
    fn test_shortlist_respects_limit_and_order() {
        let matcher = Matcher::with_default_options();
        let case = create_case(50);

        let candidates: Vec<ProviderCandidate> = (0..10)
            .map(|i| create_candidate(&format!("Dr. {}", i), i * 3, 3.0 + f64::from(i) * 0.2))
            .collect();

        let shortlist = matcher.shortlist(&case, &candidates, 4);

        assert_eq!(shortlist.len(), 4);
        assert_eq!(shortlist[0].candidate.name, "Dr. 9");
        for pair in shortlist.windows(2) {
            assert!(pair[0].breakdown.total >= pair[1].breakdown.total);
        }
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let case = create_case(92);
        let candidates: Vec<ProviderCandidate> = (0..200)
            .map(|i| create_candidate(&format!("Dr. {}", i), i % 35, 2.0 + f64::from(i % 7) * 0.5))
            .collect();

        let sequential = Matcher::new(MatcherOptions {
            parallel_threshold: usize::MAX,
        });
        let parallel = Matcher::new(MatcherOptions {
            parallel_threshold: 1,
        });

        assert_eq!(
            sequential.rank(&case, &candidates).unwrap(),
            parallel.rank(&case, &candidates).unwrap()
        );
        assert_eq!(
            sequential.shortlist(&case, &candidates, 20),
            parallel.shortlist(&case, &candidates, 20)
        );
    }

    #[test]
    fn test_rank_with_shortlist_agrees_with_separate_calls() {
        let matcher = Matcher::with_default_options();
        let case = create_case(75);
        let candidates = vec![
            create_candidate("Dr. A", 10, 4.0),
            create_candidate("Dr. B", 22, 4.6),
            create_candidate("Dr. C", 10, 4.0),
            create_candidate("Dr. D", 5, 3.2),
        ];

        let (result, shortlist) = matcher.rank_with_shortlist(&case, &candidates, 3).unwrap();

        assert_eq!(result, matcher.rank(&case, &candidates).unwrap());
        assert_eq!(shortlist, matcher.shortlist(&case, &candidates, 3));
        assert_eq!(shortlist[0].candidate, result.candidate);
        assert_eq!(shortlist[1].candidate.name, "Dr. A");
    }

    #[test]
    fn test_rank_with_shortlist_empty_pool() {
        let result = Matcher::with_default_options().rank_with_shortlist(&create_case(50), &[], 3);

        assert_eq!(result, Err(MatchError::EmptyCandidatePool(Specialty::Cardiology)));
    }

    #[test]
    fn test_explanation_names_patient() {
        let case = create_case(50);
        let result = rank(&case, &[create_candidate("Dr. Solo", 3, 3.0)]).unwrap();

        assert_eq!(
            result.explanation,
            "Dr. Solo was matched to Asha based on specialty alignment."
        );
        assert_eq!(result.breakdown.match_quality, MatchQuality::Low);
    }
}
