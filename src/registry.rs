//! Condition registry — the fixed mapping from classifier output class to
//! condition name, plus the severity tier classifier.
//!
//! Condition names are kept verbatim from the source dataset (including
//! trailing spaces and spelling) because they are the exact join keys into
//! the reference tables.

use std::collections::HashMap;

use serde::Serialize;

/// Returned when the classifier emits a class with no registry entry.
/// Lookup never fails; an unmapped class resolves to this sentinel.
pub const UNKNOWN_CONDITION: &str = "Unknown condition";

/// Classifier class id → condition name, verbatim dataset keys.
const CONDITIONS: &[(usize, &str)] = &[
    (0, "(vertigo) Paroymsal  Positional Vertigo"),
    (1, "AIDS"),
    (2, "Acne"),
    (3, "Alcoholic hepatitis"),
    (4, "Allergy"),
    (5, "Arthritis"),
    (6, "Bronchial Asthma"),
    (7, "Cervical spondylosis"),
    (8, "Chicken pox"),
    (9, "Chronic cholestasis"),
    (10, "Common Cold"),
    (11, "Dengue"),
    (12, "Diabetes "),
    (13, "Dimorphic hemmorhoids(piles)"),
    (14, "Drug Reaction"),
    (15, "Fungal infection"),
    (16, "GERD"),
    (17, "Gastroenteritis"),
    (18, "Heart attack"),
    (19, "Hepatitis B"),
    (20, "Hepatitis C"),
    (21, "Hepatitis D"),
    (22, "Hepatitis E"),
    (23, "Hypertension "),
    (24, "Hyperthyroidism"),
    (25, "Hypoglycemia"),
    (26, "Hypothyroidism"),
    (27, "Impetigo"),
    (28, "Jaundice"),
    (29, "Malaria"),
    (30, "Migraine"),
    (31, "Osteoarthristis"),
    (32, "Paralysis (brain hemorrhage)"),
    (33, "Peptic ulcer diseae"),
    (34, "Pneumonia"),
    (35, "Psoriasis"),
    (36, "Tuberculosis"),
    (37, "Typhoid"),
    (38, "Urinary tract infection"),
    (39, "Varicose veins"),
    (40, "hepatitis A"),
];

/// Severity tier of a condition, assigned by name-substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mild => write!(f, "Mild"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Severe => write!(f, "Severe"),
        }
    }
}

/// Conditions whose names mark the severe tier.
const SEVERE_MARKERS: &[&str] = &["AIDS", "Heart attack", "Paralysis", "Tuberculosis"];
/// Conditions whose names mark the moderate tier.
const MODERATE_MARKERS: &[&str] = &["Diabetes", "Hypertension", "Asthma"];

/// Fixed class-id → condition-name registry.
pub struct ConditionRegistry {
    names: HashMap<usize, &'static str>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        let names = CONDITIONS.iter().copied().collect();
        Self { names }
    }

    /// Condition name for a classifier output class. Unmapped classes
    /// resolve to [`UNKNOWN_CONDITION`].
    pub fn name_for(&self, class: usize) -> &'static str {
        self.names.get(&class).copied().unwrap_or(UNKNOWN_CONDITION)
    }

    /// All class ids the classifier may legitimately emit.
    pub fn class_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.names.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All conditions with their severity tier, sorted by name.
    pub fn list(&self) -> Vec<ConditionEntry> {
        let mut entries: Vec<ConditionEntry> = CONDITIONS
            .iter()
            .map(|(class, name)| ConditionEntry {
                name: name.to_string(),
                class: *class,
                severity: classify_severity(name),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A condition as exposed by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionEntry {
    pub name: String,
    pub class: usize,
    pub severity: Severity,
}

/// Static severity tiering by name substring, evaluated severe → moderate →
/// default mild; first matching tier wins.
pub fn classify_severity(condition: &str) -> Severity {
    if SEVERE_MARKERS.iter().any(|m| condition.contains(m)) {
        Severity::Severe
    } else if MODERATE_MARKERS.iter().any(|m| condition.contains(m)) {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}
