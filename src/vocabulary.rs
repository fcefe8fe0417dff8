//! Symptom vocabulary — the fixed mapping from canonical symptom name to
//! feature index.
//!
//! The table is frozen: it must match, position for position, the feature
//! layout the classifier artifact was trained against. Names are kept
//! verbatim from the source dataset, including its historical oddities
//! (stray spaces, a `.1` suffix), because they are the canonical keys.

use std::collections::HashMap;

use serde::Serialize;

/// Canonical symptom names in feature-index order. Index in this slice IS
/// the feature index.
const SYMPTOMS: &[&str] = &[
    "itching",
    "skin_rash",
    "nodal_skin_eruptions",
    "continuous_sneezing",
    "shivering",
    "chills",
    "joint_pain",
    "stomach_pain",
    "acidity",
    "ulcers_on_tongue",
    "muscle_wasting",
    "vomiting",
    "burning_micturition",
    "spotting_ urination",
    "fatigue",
    "weight_gain",
    "anxiety",
    "cold_hands_and_feets",
    "mood_swings",
    "weight_loss",
    "restlessness",
    "lethargy",
    "patches_in_throat",
    "irregular_sugar_level",
    "cough",
    "high_fever",
    "sunken_eyes",
    "breathlessness",
    "sweating",
    "dehydration",
    "indigestion",
    "headache",
    "yellowish_skin",
    "dark_urine",
    "nausea",
    "loss_of_appetite",
    "pain_behind_the_eyes",
    "back_pain",
    "constipation",
    "abdominal_pain",
    "diarrhoea",
    "mild_fever",
    "yellow_urine",
    "yellowing_of_eyes",
    "acute_liver_failure",
    "fluid_overload",
    "swelling_of_stomach",
    "swelled_lymph_nodes",
    "malaise",
    "blurred_and_distorted_vision",
    "phlegm",
    "throat_irritation",
    "redness_of_eyes",
    "sinus_pressure",
    "runny_nose",
    "congestion",
    "chest_pain",
    "weakness_in_limbs",
    "fast_heart_rate",
    "pain_during_bowel_movements",
    "pain_in_anal_region",
    "bloody_stool",
    "irritation_in_anus",
    "neck_pain",
    "dizziness",
    "cramps",
    "bruising",
    "obesity",
    "swollen_legs",
    "swollen_blood_vessels",
    "puffy_face_and_eyes",
    "enlarged_thyroid",
    "brittle_nails",
    "swollen_extremeties",
    "excessive_hunger",
    "extra_marital_contacts",
    "drying_and_tingling_lips",
    "slurred_speech",
    "knee_pain",
    "hip_joint_pain",
    "muscle_weakness",
    "stiff_neck",
    "swelling_joints",
    "movement_stiffness",
    "spinning_movements",
    "loss_of_balance",
    "unsteadiness",
    "weakness_of_one_body_side",
    "loss_of_smell",
    "bladder_discomfort",
    "foul_smell_of urine",
    "continuous_feel_of_urine",
    "passage_of_gases",
    "internal_itching",
    "toxic_look_(typhos)",
    "depression",
    "irritability",
    "muscle_pain",
    "altered_sensorium",
    "red_spots_over_body",
    "belly_pain",
    "abnormal_menstruation",
    "dischromic _patches",
    "watering_from_eyes",
    "increased_appetite",
    "polyuria",
    "family_history",
    "mucoid_sputum",
    "rusty_sputum",
    "lack_of_concentration",
    "visual_disturbances",
    "receiving_blood_transfusion",
    "receiving_unsterile_injections",
    "coma",
    "stomach_bleeding",
    "distention_of_abdomen",
    "history_of_alcohol_consumption",
    "fluid_overload.1",
    "blood_in_sputum",
    "prominent_veins_on_calf",
    "palpitations",
    "painful_walking",
    "pus_filled_pimples",
    "blackheads",
    "scurring",
    "skin_peeling",
    "silver_like_dusting",
    "small_dents_in_nails",
    "inflammatory_nails",
    "blister",
    "red_sore_around_nose",
    "yellow_crust_ooze",
];

/// Fixed symptom-name → feature-index mapping, bijective on `[0, len)`.
pub struct SymptomVocabulary {
    indices: HashMap<&'static str, usize>,
}

impl SymptomVocabulary {
    pub fn new() -> Self {
        let indices = SYMPTOMS
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, i))
            .collect();
        Self { indices }
    }

    /// Feature index for a canonical symptom name, if recognized.
    pub fn index_of(&self, symptom: &str) -> Option<usize> {
        self.indices.get(symptom).copied()
    }

    /// Number of features (length of every feature vector).
    pub fn len(&self) -> usize {
        SYMPTOMS.len()
    }

    pub fn is_empty(&self) -> bool {
        SYMPTOMS.is_empty()
    }

    /// All symptoms with display metadata, sorted by display name.
    pub fn list(&self) -> Vec<SymptomEntry> {
        let mut entries: Vec<SymptomEntry> = SYMPTOMS
            .iter()
            .enumerate()
            .map(|(index, key)| SymptomEntry {
                name: display_name(key),
                key: key.to_string(),
                index,
                category: categorize(key),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// A symptom as exposed by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomEntry {
    pub name: String,
    pub key: String,
    pub index: usize,
    pub category: &'static str,
}

/// Normalize a user-entered token to the vocabulary's canonical form:
/// trimmed, lowercased, spaces joined with underscores.
pub fn canonicalize(token: &str) -> String {
    token.trim().to_lowercase().replace(' ', "_")
}

/// Title-cased display form of a canonical key ("joint_pain" → "Joint Pain").
fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coarse keyword-based symptom category for the listing endpoint.
fn categorize(key: &str) -> &'static str {
    const TEMPERATURE: &[&str] = &["fever", "temperature", "chills", "sweating"];
    const PAIN: &[&str] = &["pain", "ache", "cramps"];
    const SKIN: &[&str] = &["skin", "rash", "itching"];
    const DIGESTIVE: &[&str] = &["stomach", "abdominal", "nausea", "vomiting"];
    const RESPIRATORY: &[&str] = &["cough", "breathlessness", "chest"];

    if TEMPERATURE.iter().any(|w| key.contains(w)) {
        "Temperature Related"
    } else if PAIN.iter().any(|w| key.contains(w)) {
        "Pain Related"
    } else if SKIN.iter().any(|w| key.contains(w)) {
        "Skin Related"
    } else if DIGESTIVE.iter().any(|w| key.contains(w)) {
        "Digestive"
    } else if RESPIRATORY.iter().any(|w| key.contains(w)) {
        "Respiratory"
    } else {
        "General"
    }
}
