use tracing::{info, warn};

use crate::config::MatchingSettings;
use crate::core::{assess_severity, preparation_checklist, Matcher};
use crate::models::{
    BatchReport, BatchRequest, CaseOutcome, PatientCase, ProviderCandidate, ProviderDirectory,
    ShortlistEntry,
};

/// Runs a batch of patient cases against one provider directory
///
/// This is the layer that owns input policy: it scopes the directory to each
/// case's specialty and decides what to do with out-of-range inputs before
/// anything reaches the matcher.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    matcher: Matcher,
    reject_out_of_range: bool,
    shortlist_limit: usize,
}

impl BatchRunner {
    pub fn new(matcher: Matcher, reject_out_of_range: bool, shortlist_limit: usize) -> Self {
        Self {
            matcher,
            reject_out_of_range,
            shortlist_limit,
        }
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self::new(
            Matcher::new(settings.matcher_options()),
            settings.reject_out_of_range,
            settings.shortlist_limit,
        )
    }

    /// Match every case in the batch
    ///
    /// A failing case is reported in its outcome and never stops the batch.
    pub fn run(&self, request: &BatchRequest) -> BatchReport {
        let outcomes: Vec<CaseOutcome> = request
            .cases
            .iter()
            .map(|case| self.process_case(case, &request.directory))
            .collect();

        let matched = outcomes.iter().filter(|o| o.result.is_some()).count();
        info!("Batch complete: {} of {} cases matched", matched, outcomes.len());

        BatchReport {
            generated_at: chrono::Utc::now(),
            total_cases: outcomes.len(),
            matched,
            outcomes,
        }
    }

    /// Match a single case against the directory
    pub fn process_case(&self, case: &PatientCase, directory: &ProviderDirectory) -> CaseOutcome {
        let mut outcome = CaseOutcome {
            patient: case.name.clone(),
            specialty: case.specialty,
            severity: assess_severity(&case.symptoms, case.urgency_score),
            preparation: preparation_checklist(case.specialty, case.urgency_score),
            result: None,
            shortlist: Vec::new(),
            error: None,
        };

        if let Err(e) = case.check_ranges() {
            if self.reject_out_of_range {
                warn!("Rejecting case {:?}: {}", case.name, e);
                outcome.error = Some(e.to_string());
                return outcome;
            }
            warn!("Scoring case {:?} as given: {}", case.name, e);
        }

        let pool = self.eligible_candidates(case, directory);

        match self
            .matcher
            .rank_with_shortlist(case, &pool, self.shortlist_limit)
        {
            Ok((result, shortlist)) => {
                outcome.shortlist = shortlist
                    .into_iter()
                    .map(|scored| ShortlistEntry {
                        name: scored.candidate.name,
                        total: scored.breakdown.total,
                        match_quality: scored.breakdown.match_quality,
                    })
                    .collect();
                outcome.result = Some(result);
            }
            Err(e) => {
                warn!("No match for {:?}: {}", case.name, e);
                outcome.error = Some(e.to_string());
            }
        }

        outcome
    }

    /// Specialty-scoped pool, minus out-of-range providers when rejecting
    fn eligible_candidates(
        &self,
        case: &PatientCase,
        directory: &ProviderDirectory,
    ) -> Vec<ProviderCandidate> {
        let mut pool = directory.candidates_for(case.specialty);

        pool.retain(|candidate| match candidate.check_ranges() {
            Ok(()) => true,
            Err(e) if self.reject_out_of_range => {
                warn!("Dropping provider from pool: {}", e);
                false
            }
            Err(e) => {
                warn!("Scoring provider as given: {}", e);
                true
            }
        });

        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use crate::models::{Department, Specialty};

    fn create_case(name: &str, specialty: Specialty, urgency_score: i32) -> PatientCase {
        PatientCase {
            name: Some(name.to_string()),
            age: 40,
            symptoms: "persistent wheezing at night".to_string(),
            specialty,
            urgency_score,
            preferred_language: "English".to_string(),
            preferred_slot: "11:00".to_string(),
            pre_existing_conditions: vec![],
        }
    }

    fn create_doctor(name: &str, rating: f64) -> ProviderCandidate {
        ProviderCandidate {
            name: name.to_string(),
            experience_years: 12,
            sub_specialization: "Asthma and Allergy".to_string(),
            languages_spoken: vec!["English".to_string()],
            rating,
            available_slots: vec!["11:00".to_string()],
            awards: vec![],
        }
    }

    fn create_directory() -> ProviderDirectory {
        ProviderDirectory {
            hospital: Some("City Hospital".to_string()),
            city: Some("Pune".to_string()),
            departments: vec![
                Department {
                    specialty: "pulmonology".to_string(),
                    doctors: vec![create_doctor("Dr. Lung", 4.6), create_doctor("Dr. Bad", 7.5)],
                },
                Department {
                    specialty: "Cardiology".to_string(),
                    doctors: vec![create_doctor("Dr. Heart", 4.0)],
                },
            ],
        }
    }

    #[test]
    fn test_process_case_matches_within_specialty() {
        let runner = BatchRunner::new(Matcher::default(), true, 3);
        let case = create_case("Mira", Specialty::Pulmonology, 30);

        let outcome = runner.process_case(&case, &create_directory());

        let result = outcome.result.expect("case should match");
        assert_eq!(result.candidate.name, "Dr. Lung");
        assert_eq!(outcome.shortlist[0].name, result.candidate.name);
        assert_eq!(outcome.shortlist[0].total, result.breakdown.total);
        assert_eq!(result.subspecialty_hint.as_deref(), Some("Asthma"));
        assert_eq!(outcome.shortlist.len(), 1);
        assert_eq!(outcome.severity, Severity::Low);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_tolerant_runner_keeps_out_of_range_provider() {
        let runner = BatchRunner::new(Matcher::default(), false, 3);
        let case = create_case("Mira", Specialty::Pulmonology, 30);

        let outcome = runner.process_case(&case, &create_directory());

        // a 7.5 rating outscores everyone when scored as given
        assert_eq!(outcome.result.unwrap().candidate.name, "Dr. Bad");
        assert_eq!(outcome.shortlist.len(), 2);
    }

    #[test]
    fn test_out_of_range_case_is_rejected() {
        let runner = BatchRunner::new(Matcher::default(), true, 3);
        let case = create_case("Mira", Specialty::Pulmonology, 140);

        let outcome = runner.process_case(&case, &create_directory());

        assert!(outcome.result.is_none());
        assert!(outcome.error.unwrap().contains("Out of range"));
    }

    #[test]
    fn test_empty_department_reports_error() {
        let runner = BatchRunner::new(Matcher::default(), true, 3);
        let case = create_case("Mira", Specialty::Dermatology, 30);

        let outcome = runner.process_case(&case, &create_directory());

        assert!(outcome.result.is_none());
        assert!(outcome.error.unwrap().contains("Empty candidate pool"));
    }

    #[test]
    fn test_run_counts_matches() {
        let runner = BatchRunner::new(Matcher::default(), true, 3);
        let request = BatchRequest {
            cases: vec![
                create_case("A", Specialty::Pulmonology, 30),
                create_case("B", Specialty::Neurology, 30),
                create_case("C", Specialty::Cardiology, 30),
            ],
            directory: create_directory(),
        };

        let report = runner.run(&request);

        assert_eq!(report.total_cases, 3);
        assert_eq!(report.matched, 2);
        let neurology_error = report.outcomes[1].error.as_deref().unwrap_or_default();
        assert!(neurology_error.contains("Neurology"));
    }
}
