use tracing::debug;

use crate::models::{PatientCase, Specialty};

/// Keyword phrases for one specialty
///
/// Sub-specialties are kept in declaration order: that order is what breaks
/// ties between equal keyword counts. All phrases are lower-case.
#[derive(Debug)]
pub struct SpecialtyKeywords {
    pub specialty: Specialty,
    pub subspecialties: &'static [(&'static str, &'static [&'static str])],
    /// Terms that mark a provider as working near the specialty's focus
    /// areas without naming the inferred one
    pub related: &'static [&'static str],
}

/// Symptom-to-subspecialty table, one entry per specialty in
/// [`Specialty::ALL`] order
pub static KEYWORD_TABLE: [SpecialtyKeywords; 11] = [
    SpecialtyKeywords {
        specialty: Specialty::Cardiology,
        subspecialties: &[
            (
                "Interventional",
                &[
                    "angioplasty",
                    "stent",
                    "catheterization",
                    "coronary",
                    "heart attack",
                    "myocardial infarction",
                    "acute coronary",
                    "chest pain",
                    "crushing",
                    "left arm",
                ],
            ),
            (
                "Electrophysiology",
                &[
                    "arrhythmia",
                    "palpitations",
                    "irregular heartbeat",
                    "atrial fibrillation",
                    "afib",
                    "flutter",
                    "tachycardia",
                    "bradycardia",
                    "heart rhythm",
                ],
            ),
            (
                "Heart Failure",
                &[
                    "shortness of breath",
                    "swelling",
                    "edema",
                    "fatigue",
                    "weak heart",
                    "heart failure",
                    "cardiomyopathy",
                ],
            ),
            ("Congenital", &["birth defect", "congenital", "hole in heart", "murmur"]),
        ],
        related: &["cardiac", "coronary", "heart", "vascular", "echocardiography", "arrhythmia"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Dermatology,
        subspecialties: &[
            ("Acne", &["acne", "pimples", "blackheads", "breakout"]),
            ("Psoriasis", &["psoriasis", "scaly skin", "plaque"]),
            ("Skin Cancer", &["mole", "melanoma", "skin cancer", "changing spot"]),
            ("Eczema", &["eczema", "atopic dermatitis", "itchy rash"]),
        ],
        related: &["cosmetic", "dermatopathology", "mohs", "skin", "allergy"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Ent,
        subspecialties: &[
            ("Hearing", &["hearing loss", "deaf", "tinnitus", "ringing in ear"]),
            ("Sinus", &["sinusitis", "sinus", "nasal congestion"]),
            ("Throat", &["sore throat", "tonsillitis", "hoarseness", "voice problem"]),
        ],
        related: &["otology", "rhinology", "laryngology", "head and neck", "audiology"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Gastroenterology,
        subspecialties: &[
            (
                "Liver",
                &[
                    "jaundice",
                    "hepatitis",
                    "cirrhosis",
                    "liver",
                    "yellow skin",
                    "ascites",
                    "liver disease",
                ],
            ),
            (
                "Inflammatory Bowel",
                &[
                    "crohn",
                    "colitis",
                    "inflammatory bowel",
                    "ibd",
                    "bloody stool",
                    "chronic diarrhea",
                ],
            ),
            ("Pancreas", &["pancreatitis", "pancreas", "diabetes"]),
            ("Acid Reflux", &["gerd", "acid reflux", "heartburn", "esophagus"]),
        ],
        related: &["endoscopy", "hepatology", "colorectal", "digestive", "motility"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Hepatology,
        subspecialties: &[
            ("Viral Hepatitis", &["hepatitis b", "hepatitis c", "hepatitis", "viral load"]),
            ("Cirrhosis", &["cirrhosis", "ascites", "varices", "liver failure", "confusion"]),
            (
                "Fatty Liver",
                &["fatty liver", "nafld", "obesity", "elevated liver enzymes"],
            ),
            ("Transplant", &["liver transplant", "transplant", "end-stage liver"]),
        ],
        related: &["liver", "hepatobiliary", "transplant", "gastroenterology"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Neurology,
        subspecialties: &[
            (
                "Stroke",
                &[
                    "stroke",
                    "paralysis",
                    "facial drooping",
                    "slurred speech",
                    "sudden weakness",
                    "tia",
                    "transient ischemic",
                ],
            ),
            ("Epilepsy", &["seizure", "epilepsy", "convulsion", "fits"]),
            ("Migraine", &["migraine", "severe headache", "visual aura"]),
            (
                "Movement Disorders",
                &["parkinson", "tremor", "movement disorder", "dystonia"],
            ),
            ("Dementia", &["alzheimer", "dementia", "memory loss", "cognitive decline"]),
        ],
        related: &["neurovascular", "neurophysiology", "headache", "cognitive", "neuromuscular"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Ophthalmology,
        subspecialties: &[
            (
                "Retina",
                &["floaters", "flashes", "retinal", "diabetic retinopathy", "vision loss"],
            ),
            ("Glaucoma", &["glaucoma", "eye pressure", "peripheral vision", "halos"]),
            ("Cataract", &["cataract", "cloudy vision", "blurry vision", "glare"]),
            ("Cornea", &["corneal", "dry eye", "eye injury", "red eye"]),
        ],
        related: &["vitreo", "oculoplastic", "neuro-ophthalmology", "refractive", "uveitis"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Orthopedics,
        subspecialties: &[
            (
                "Sports",
                &[
                    "sports injury",
                    "ligament tear",
                    "acl",
                    "mcl",
                    "meniscus",
                    "athletic injury",
                ],
            ),
            (
                "Spine",
                &[
                    "back pain",
                    "spine",
                    "disc",
                    "herniated",
                    "sciatica",
                    "spinal",
                    "vertebra",
                ],
            ),
            (
                "Joint Replacement",
                &[
                    "knee replacement",
                    "hip replacement",
                    "arthritis",
                    "joint pain",
                    "osteoarthritis",
                ],
            ),
            ("Trauma", &["fracture", "broken bone", "trauma", "injury"]),
        ],
        related: &["arthroscopy", "musculoskeletal", "fracture", "joint", "sports medicine"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Pediatrics,
        subspecialties: &[
            (
                "Neonatology",
                &["newborn", "premature", "neonatal", "feeding difficulty"],
            ),
            (
                "Developmental",
                &["developmental delay", "speech delay", "autism", "adhd", "not walking"],
            ),
            (
                "Infectious Disease",
                &["fever", "rash", "ear infection", "cough", "vaccination"],
            ),
        ],
        related: &["adolescent", "child health", "neonatal", "developmental", "immunization"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Psychiatry,
        subspecialties: &[
            (
                "Depression",
                &[
                    "depression",
                    "low mood",
                    "sadness",
                    "hopelessness",
                    "loss of interest",
                    "suicidal",
                ],
            ),
            ("Anxiety", &["anxiety", "panic", "worry", "nervousness", "ocd"]),
            ("Bipolar", &["bipolar", "manic", "mood swings"]),
            ("Psychosis", &["schizophrenia", "psychosis", "hallucination", "delusion"]),
        ],
        related: &["mood", "behavioral", "addiction", "psychotherapy", "neuropsychiatry"],
    },
    SpecialtyKeywords {
        specialty: Specialty::Pulmonology,
        subspecialties: &[
            ("Asthma", &["asthma", "wheezing", "breathing difficulty", "inhaler"]),
            ("COPD", &["copd", "emphysema", "chronic bronchitis", "smoker"]),
            ("Sleep", &["sleep apnea", "snoring", "cpap"]),
            (
                "Interstitial",
                &["fibrosis", "interstitial lung", "pulmonary fibrosis"],
            ),
        ],
        related: &["respiratory", "critical care", "bronch", "lung", "thoracic"],
    },
];

/// Look up the keyword entry for a specialty
#[inline]
pub fn keywords_for(specialty: Specialty) -> &'static SpecialtyKeywords {
    &KEYWORD_TABLE[specialty as usize]
}

/// Infer the most plausible sub-specialty from free-text symptoms
///
/// Each sub-specialty scores one point per keyword phrase found in the
/// lower-cased text. The strictly highest count wins, so on a tie the
/// sub-specialty declared first in [`KEYWORD_TABLE`] is kept. Returns `None`
/// when nothing matches.
pub fn infer_subspecialty(symptoms: &str, specialty: Specialty) -> Option<&'static str> {
    let text = symptoms.to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;

    for &(name, keywords) in keywords_for(specialty).subspecialties {
        let count = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }

    debug!("Sub-specialty inference for {}: {:?}", specialty, best);

    best.map(|(name, _)| name)
}

/// Infer the sub-specialty for a case, reading its pre-existing conditions
/// alongside the symptoms
pub fn infer_for_case(case: &PatientCase) -> Option<&'static str> {
    if case.pre_existing_conditions.is_empty() {
        return infer_subspecialty(&case.symptoms, case.specialty);
    }

    let text = format!("{} {}", case.symptoms, case.pre_existing_conditions.join(" "));
    infer_subspecialty(&text, case.specialty)
}

/// Check whether a provider's focus area mentions any related keyword
#[inline]
pub fn mentions_related_keyword(specialty: Specialty, sub_specialization: &str) -> bool {
    let focus = sub_specialization.to_lowercase();
    keywords_for(specialty)
        .related
        .iter()
        .any(|kw| focus.contains(kw))
}
