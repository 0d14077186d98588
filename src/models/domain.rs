use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::MatchError;

/// Top-level medical specialties a case can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Specialty {
    Cardiology,
    Dermatology,
    Ent,
    Gastroenterology,
    Hepatology,
    Neurology,
    Ophthalmology,
    Orthopedics,
    Pediatrics,
    Psychiatry,
    Pulmonology,
}

impl Specialty {
    pub const ALL: [Specialty; 11] = [
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Ent,
        Specialty::Gastroenterology,
        Specialty::Hepatology,
        Specialty::Neurology,
        Specialty::Ophthalmology,
        Specialty::Orthopedics,
        Specialty::Pediatrics,
        Specialty::Psychiatry,
        Specialty::Pulmonology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Ent => "ENT",
            Specialty::Gastroenterology => "Gastroenterology",
            Specialty::Hepatology => "Hepatology",
            Specialty::Neurology => "Neurology",
            Specialty::Ophthalmology => "Ophthalmology",
            Specialty::Orthopedics => "Orthopedics",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Psychiatry => "Psychiatry",
            Specialty::Pulmonology => "Pulmonology",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let specialty = match normalized.as_str() {
            "cardiology" => Specialty::Cardiology,
            "dermatology" => Specialty::Dermatology,
            "ent" | "ear, nose and throat" => Specialty::Ent,
            "gastroenterology" => Specialty::Gastroenterology,
            "hepatology" => Specialty::Hepatology,
            "neurology" => Specialty::Neurology,
            "ophthalmology" => Specialty::Ophthalmology,
            // Older directory files spell it without the "o"
            "orthopedics" | "orthpedics" => Specialty::Orthopedics,
            "pediatrics" => Specialty::Pediatrics,
            "psychiatry" => Specialty::Psychiatry,
            "pulmonology" => Specialty::Pulmonology,
            _ => return Err(MatchError::UnknownSpecialty(s.to_string())),
        };
        Ok(specialty)
    }
}

impl TryFrom<String> for Specialty {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Specialty> for String {
    fn from(specialty: Specialty) -> Self {
        specialty.as_str().to_string()
    }
}

/// Patient case handed over by the triage analysis stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PatientCase {
    #[serde(default)]
    pub name: Option<String>,
    pub age: u32,
    pub symptoms: String,
    pub specialty: Specialty,
    #[serde(rename = "urgencyScore", alias = "urgency_score")]
    #[validate(range(min = 0, max = 100))]
    pub urgency_score: i32,
    #[serde(rename = "preferredLanguage", alias = "preferred_language")]
    pub preferred_language: String,
    #[serde(rename = "preferredSlot", alias = "preferred_slot")]
    pub preferred_slot: String,
    #[serde(rename = "preExistingConditions", alias = "pre_existing_conditions", default)]
    pub pre_existing_conditions: Vec<String>,
}

impl PatientCase {
    /// Check the nominal ranges the scoring arithmetic assumes
    ///
    /// The matcher never calls this; callers decide whether an out-of-range
    /// case is rejected or scored as given.
    pub fn check_ranges(&self) -> Result<(), MatchError> {
        self.validate()
            .map_err(|e| MatchError::OutOfRangeInput(format!("case: {}", e)))
    }
}

/// Provider record from the directory, already scoped to one specialty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProviderCandidate {
    pub name: String,
    #[serde(rename = "experienceYears", alias = "experience_years", default)]
    pub experience_years: u32,
    #[serde(rename = "subSpecialization", alias = "sub_specialization", default)]
    pub sub_specialization: String,
    #[serde(rename = "languagesSpoken", alias = "languages_spoken", default)]
    pub languages_spoken: Vec<String>,
    #[serde(alias = "patient_rating", default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "availableSlots", alias = "slots", default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
}

impl ProviderCandidate {
    /// Same contract as [`PatientCase::check_ranges`], for the rating
    pub fn check_ranges(&self) -> Result<(), MatchError> {
        self.validate()
            .map_err(|e| MatchError::OutOfRangeInput(format!("provider {}: {}", self.name, e)))
    }
}

/// How the preferred slot lined up with the provider's availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotMatch {
    Exact,
    Alternative,
    None,
}

/// Strength of the sub-specialty alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubspecialtyMatch {
    Strong,
    Related,
    None,
}

/// Four-band label derived purely from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchQuality {
    /// Lower bounds are inclusive: 100 → excellent, 70 → good, 50 → fair
    pub fn from_total(total: f64) -> Self {
        if total >= 100.0 {
            MatchQuality::Excellent
        } else if total >= 70.0 {
            MatchQuality::Good
        } else if total >= 50.0 {
            MatchQuality::Fair
        } else {
            MatchQuality::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "excellent",
            MatchQuality::Good => "good",
            MatchQuality::Fair => "fair",
            MatchQuality::Low => "low",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notable condition that earns a clause in the match explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MatchReason {
    ExactSlot { priority: bool },
    LanguageMatch,
    SubspecialtyExpertise,
    Experienced { years: u32 },
    HighRating { rating: f64 },
    Awards,
    UrgencyExperience,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::ExactSlot { priority: true } => {
                write!(f, "preferred appointment slot is open with priority for an urgent case")
            }
            MatchReason::ExactSlot { priority: false } => {
                write!(f, "appointment slot matches patient preference")
            }
            MatchReason::LanguageMatch => write!(f, "speaks patient's preferred language"),
            MatchReason::SubspecialtyExpertise => {
                write!(f, "has specific expertise in patient's condition")
            }
            MatchReason::Experienced { years } => write!(f, "highly experienced ({} years)", years),
            MatchReason::HighRating { rating } => {
                write!(f, "excellent patient rating ({}/5.0)", rating)
            }
            MatchReason::Awards => write!(f, "recognized with professional awards"),
            MatchReason::UrgencyExperience => {
                write!(f, "experience level suited to the case urgency")
            }
        }
    }
}

/// Per-factor scores for one (case, candidate) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub slot: f64,
    pub language: f64,
    pub rating: f64,
    pub experience: f64,
    pub subspecialty: f64,
    pub awards: f64,
    pub age_appropriate: f64,
    pub urgency_experience: f64,
    pub total: f64,
    pub match_quality: MatchQuality,
    pub slot_match: SlotMatch,
    pub subspecialty_match: SubspecialtyMatch,
    pub reasons: Vec<MatchReason>,
}

impl ScoreBreakdown {
    /// Sum of the eight factor scores, in declaration order
    pub fn factor_sum(&self) -> f64 {
        self.slot
            + self.language
            + self.rating
            + self.experience
            + self.subspecialty
            + self.awards
            + self.age_appropriate
            + self.urgency_experience
    }
}

/// A candidate paired with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: ProviderCandidate,
    pub breakdown: ScoreBreakdown,
}

/// Outcome of a ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate: ProviderCandidate,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
    pub subspecialty_hint: Option<String>,
    pub candidates_evaluated: usize,
}
