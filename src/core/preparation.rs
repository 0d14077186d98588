use crate::models::Specialty;

/// Urgency at which the emergency-room warning leads the checklist
const URGENT_PREPARATION_THRESHOLD: i32 = 80;

/// Build the appointment preparation checklist for a case
pub fn preparation_checklist(specialty: Specialty, urgency_score: i32) -> Vec<String> {
    let mut items = vec![
        "Bring valid ID and insurance card".to_string(),
        "List all current medications with dosages".to_string(),
    ];

    items.extend(specialty_items(specialty).iter().map(|s| s.to_string()));

    if urgency_score >= URGENT_PREPARATION_THRESHOLD {
        items.insert(
            0,
            "HIGH URGENCY: Go to the emergency room if symptoms worsen".to_string(),
        );
    }

    items
}

fn specialty_items(specialty: Specialty) -> &'static [&'static str] {
    match specialty {
        Specialty::Cardiology => &[
            "Bring previous ECG/echo reports if available",
            "Note any chest pain episodes with timing",
        ],
        Specialty::Gastroenterology | Specialty::Hepatology => &[
            "Keep a food diary for 3 days before visit",
            "Note bowel movement patterns",
        ],
        Specialty::Neurology => &[
            "Document seizure episodes if applicable",
            "Bring previous brain imaging (MRI/CT) reports",
        ],
        Specialty::Orthopedics => &[
            "Bring previous X-rays or MRI scans",
            "Note which movements cause pain",
        ],
        Specialty::Dermatology => &[
            "Document when skin changes started",
            "Avoid makeup on affected areas",
        ],
        Specialty::Psychiatry => &["Keep a mood diary", "List previous treatments tried"],
        Specialty::Pediatrics => &["Bring the child's vaccination record"],
        Specialty::Ent | Specialty::Ophthalmology | Specialty::Pulmonology => &[],
    }
}
