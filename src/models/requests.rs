use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::domain::{PatientCase, ProviderCandidate, Specialty};

/// Batch of cases to match against one provider directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub cases: Vec<PatientCase>,
    pub directory: ProviderDirectory,
}

/// Hospital provider directory, grouped by department
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDirectory {
    #[serde(alias = "hospital_name", default)]
    pub hospital: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub specialty: String,
    #[serde(default)]
    pub doctors: Vec<ProviderCandidate>,
}

impl ProviderDirectory {
    /// Collect the candidate pool for one specialty
    ///
    /// Departments whose specialty name is not recognised are skipped.
    pub fn candidates_for(&self, specialty: Specialty) -> Vec<ProviderCandidate> {
        self.departments
            .iter()
            .filter(|dept| match dept.specialty.parse::<Specialty>() {
                Ok(s) => s == specialty,
                Err(e) => {
                    warn!("Skipping department: {}", e);
                    false
                }
            })
            .flat_map(|dept| dept.doctors.iter().cloned())
            .collect()
    }
}
