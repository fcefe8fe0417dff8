//! Enrichment repository — resolves a condition name into baseline
//! guidance using the reference tables.
//!
//! Lookups are exact-match on the canonical condition name; there is no
//! fuzzy or case-insensitive fallback. Each table has its own fixed miss
//! default, so a condition absent from every table still yields a complete
//! `BaselineInfo`.

use std::sync::Arc;

use crate::registry::{classify_severity, Severity};

use super::tables::ReferenceTables;

/// Diet text used when the diets table has no entry for a condition.
pub const DEFAULT_DIET: &str = "Balanced diet with plenty of fluids and nutritious foods";
/// Single workout entry used when the workouts table has no entry.
pub const DEFAULT_WORKOUT: &str = "Light exercise as recommended by healthcare provider";

/// Reference-table-derived guidance for one condition, before any AI
/// enhancement.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineInfo {
    pub description: String,
    pub severity: Severity,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    pub diet: String,
    pub workouts: Vec<String>,
}

/// Read-only repository over the loaded reference tables.
pub struct EnrichmentRepository {
    tables: Arc<ReferenceTables>,
}

impl EnrichmentRepository {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Baseline guidance for a condition. Pure function of the condition
    /// name and the (immutable) tables — repeated calls are identical.
    pub fn lookup(&self, condition: &str) -> BaselineInfo {
        let description = self
            .tables
            .descriptions
            .get(condition)
            .cloned()
            .unwrap_or_else(|| default_description(condition));

        let precautions = self
            .tables
            .precautions
            .get(condition)
            .cloned()
            .unwrap_or_default();

        let medications = self
            .tables
            .medications
            .get(condition)
            .cloned()
            .unwrap_or_default();

        let diet = self
            .tables
            .diets
            .get(condition)
            .cloned()
            .unwrap_or_else(|| DEFAULT_DIET.to_string());

        let workouts = self
            .tables
            .workouts
            .get(condition)
            .cloned()
            .unwrap_or_else(|| vec![DEFAULT_WORKOUT.to_string()]);

        BaselineInfo {
            description,
            severity: classify_severity(condition),
            precautions,
            medications,
            diet,
            workouts,
        }
    }
}

/// Placeholder description naming the condition, used on a descriptions
/// table miss.
fn default_description(condition: &str) -> String {
    format!(
        "{condition} is a medical condition that requires proper attention and care. \
         Consult a qualified healthcare professional for accurate diagnosis and treatment."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_with_migraine() -> Arc<ReferenceTables> {
        let mut tables = ReferenceTables::default();
        tables
            .descriptions
            .insert("Migraine".into(), "A recurring headache disorder.".into());
        tables.precautions.insert(
            "Migraine".into(),
            vec!["rest in a dark room".into(), "stay hydrated".into()],
        );
        tables
            .medications
            .insert("Migraine".into(), vec!["Ibuprofen".into()]);
        tables
            .diets
            .insert("Migraine".into(), "Regular meals.".into());
        tables
            .workouts
            .insert("Migraine".into(), vec!["light stretching".into()]);
        Arc::new(tables)
    }

    #[test]
    fn hit_returns_table_values() {
        let repo = EnrichmentRepository::new(tables_with_migraine());
        let info = repo.lookup("Migraine");
        assert_eq!(info.description, "A recurring headache disorder.");
        assert_eq!(info.precautions.len(), 2);
        assert_eq!(info.medications, vec!["Ibuprofen".to_string()]);
        assert_eq!(info.diet, "Regular meals.");
        assert_eq!(info.workouts, vec!["light stretching".to_string()]);
        assert_eq!(info.severity, Severity::Mild);
    }

    #[test]
    fn miss_defaults_are_per_table() {
        let repo = EnrichmentRepository::new(Arc::new(ReferenceTables::default()));
        let info = repo.lookup("Malaria");
        assert!(info.description.starts_with("Malaria is a medical condition"));
        assert!(info.precautions.is_empty());
        assert!(info.medications.is_empty());
        assert_eq!(info.diet, DEFAULT_DIET);
        assert_eq!(info.workouts, vec![DEFAULT_WORKOUT.to_string()]);
    }

    #[test]
    fn partial_tables_mix_hits_and_defaults() {
        let mut tables = ReferenceTables::default();
        tables
            .descriptions
            .insert("Typhoid".into(), "An enteric fever.".into());
        let repo = EnrichmentRepository::new(Arc::new(tables));
        let info = repo.lookup("Typhoid");
        assert_eq!(info.description, "An enteric fever.");
        assert!(info.precautions.is_empty());
        assert_eq!(info.diet, DEFAULT_DIET);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let repo = EnrichmentRepository::new(tables_with_migraine());
        let info = repo.lookup("migraine"); // wrong case: miss everywhere
        assert!(info.description.starts_with("migraine is a medical condition"));
    }

    #[test]
    fn lookup_is_idempotent() {
        let repo = EnrichmentRepository::new(tables_with_migraine());
        let first = repo.lookup("Migraine");
        let second = repo.lookup("Migraine");
        assert_eq!(first, second);
    }

    #[test]
    fn severity_follows_registry_tiers() {
        let repo = EnrichmentRepository::new(Arc::new(ReferenceTables::default()));
        assert_eq!(repo.lookup("Tuberculosis").severity, Severity::Severe);
        assert_eq!(repo.lookup("Hypertension ").severity, Severity::Moderate);
        assert_eq!(repo.lookup("Common Cold").severity, Severity::Mild);
    }
}
