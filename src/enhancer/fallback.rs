//! The deterministic, network-free enrichment route.
//!
//! Used whenever enhancement is disabled or any part of the generation
//! call fails. Field-by-field contract: description, diet and severity
//! follow the baseline (severity pinned to Moderate, matching the merge
//! default); list fields prefer baseline content and fall to the generic
//! entries below when the baseline has none; traditional medicines, home
//! remedies and consultation advice are always generic, since the
//! reference tables carry no analogue.

use crate::enrichment::BaselineInfo;
use crate::registry::Severity;

use super::types::EnrichmentRecord;

pub const GENERIC_PRECAUTIONS: &[&str] = &[
    "Consult a qualified healthcare professional promptly",
    "Monitor symptoms closely and note any changes",
    "Maintain proper hygiene and rest",
    "Stay well hydrated with clean water",
    "Avoid self-medication without guidance",
];

pub const GENERIC_MEDICATIONS: &[&str] = &[
    "Consult a doctor before taking any medications",
    "Follow prescribed dosages exactly",
    "Complete the full course of treatment",
];

pub const GENERIC_TRADITIONAL_MEDICINES: &[&str] = &[
    "Tulsi (holy basil) tea: steep 8-10 fresh leaves in hot water, twice daily",
    "Ginger-turmeric milk: half a teaspoon of each in warm milk before bedtime",
    "Honey with warm water in the morning",
    "Consult a qualified practitioner for personalized traditional treatment",
];

pub const GENERIC_HOME_REMEDIES: &[&str] = &[
    "Warm salt water gargle: half a teaspoon of salt in warm water, three to four times daily",
    "Steam inhalation with a few drops of eucalyptus oil in hot water",
    "Honey-lemon water: a teaspoon of honey with half a lemon in warm water",
    "A warm compress applied to affected areas for relief",
];

pub const GENERIC_WORKOUTS: &[&str] = &[
    "Light walking for 15-20 minutes daily",
    "Gentle stretching and yoga",
    "Deep breathing exercises",
    "Avoid intense physical activity while unwell",
];

/// Consultation advice used by the merge path when the model omits it.
pub const GENERIC_CONSULTATION_ADVICE: &str =
    "Consult a healthcare provider if symptoms persist or worsen";

/// Build the fallback record for a condition from its baseline.
///
/// Deterministic: identical inputs produce identical records, which is
/// what makes every enhancement failure mode indistinguishable from
/// enhancement being disabled.
pub fn build_fallback_record(condition: &str, baseline: &BaselineInfo) -> EnrichmentRecord {
    EnrichmentRecord {
        description: baseline.description.clone(),
        severity: Severity::Moderate,
        precautions: non_empty_or(&baseline.precautions, GENERIC_PRECAUTIONS),
        medications: non_empty_or(&baseline.medications, GENERIC_MEDICATIONS),
        traditional_medicines: to_strings(GENERIC_TRADITIONAL_MEDICINES),
        home_remedies: to_strings(GENERIC_HOME_REMEDIES),
        diet: baseline.diet.clone(),
        workouts: non_empty_or(&baseline.workouts, GENERIC_WORKOUTS),
        consultation_advice: fallback_consultation_advice(condition),
    }
}

/// Consultation advice for the fallback record, naming the condition.
pub fn fallback_consultation_advice(condition: &str) -> String {
    format!(
        "Seek medical consultation within 24-48 hours if symptoms persist or worsen. \
         For {condition}, visit a general physician first, who may refer you to a specialist."
    )
}

fn non_empty_or(values: &[String], generic: &[&str]) -> Vec<String> {
    if values.is_empty() {
        to_strings(generic)
    } else {
        values.to_vec()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
