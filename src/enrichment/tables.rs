//! Reference table loading — five independent CSV tables keyed by
//! condition name, loaded once at startup.
//!
//! Each file is optional: a missing table simply means every lookup in it
//! misses and falls to that table's documented default. A present but
//! unreadable row is skipped, not fatal.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Loaded reference data for baseline enrichment.
///
/// Read-only after construction; shared across requests without locking.
#[derive(Debug, Default)]
pub struct ReferenceTables {
    pub descriptions: HashMap<String, String>,
    pub precautions: HashMap<String, Vec<String>>,
    /// A condition may have several medication rows.
    pub medications: HashMap<String, Vec<String>>,
    pub diets: HashMap<String, String>,
    /// A condition may have several workout rows.
    pub workouts: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct DescriptionRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Deserialize)]
struct PrecautionRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Precaution_1")]
    precaution_1: Option<String>,
    #[serde(rename = "Precaution_2")]
    precaution_2: Option<String>,
    #[serde(rename = "Precaution_3")]
    precaution_3: Option<String>,
    #[serde(rename = "Precaution_4")]
    precaution_4: Option<String>,
}

#[derive(Deserialize)]
struct MedicationRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Medication")]
    medication: String,
}

#[derive(Deserialize)]
struct DietRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Diet")]
    diet: String,
}

#[derive(Deserialize)]
struct WorkoutRow {
    // Lowercase headers in this one file, matching the source dataset.
    disease: String,
    workout: String,
}

impl ReferenceTables {
    /// Load all tables found under `dir`. Missing files leave the
    /// corresponding table empty.
    pub fn load(dir: &Path) -> Self {
        let mut tables = Self::default();

        for row in read_rows::<DescriptionRow>(&dir.join("description.csv")) {
            tables.descriptions.insert(row.disease, row.description);
        }

        for row in read_rows::<PrecautionRow>(&dir.join("precautions_df.csv")) {
            let precautions: Vec<String> =
                [row.precaution_1, row.precaution_2, row.precaution_3, row.precaution_4]
                    .into_iter()
                    .flatten()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
            tables.precautions.insert(row.disease, precautions);
        }

        for row in read_rows::<MedicationRow>(&dir.join("medications.csv")) {
            tables
                .medications
                .entry(row.disease)
                .or_default()
                .push(row.medication);
        }

        for row in read_rows::<DietRow>(&dir.join("diets.csv")) {
            tables.diets.insert(row.disease, row.diet);
        }

        for row in read_rows::<WorkoutRow>(&dir.join("workout_df.csv")) {
            tables
                .workouts
                .entry(row.disease)
                .or_default()
                .push(row.workout);
        }

        tables.log_summary();
        tables
    }

    fn log_summary(&self) {
        tracing::info!(
            descriptions = self.descriptions.len(),
            precautions = self.precautions.len(),
            medications = self.medications.len(),
            diets = self.diets.len(),
            workouts = self.workouts.len(),
            "reference tables loaded"
        );
    }
}

/// Deserialize all rows of one CSV file. A missing file yields no rows;
/// broken rows are skipped with a warning.
fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Vec<T> {
    let reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "reference table unavailable");
            return Vec::new();
        }
    };

    reader
        .into_deserialize()
        .filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping malformed row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn full_dataset_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "description.csv",
            "Disease,Description\nMigraine,A recurring headache disorder.\nMalaria,A mosquito-borne infection.\n",
        );
        write_dataset(
            dir.path(),
            "precautions_df.csv",
            "Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4\nMigraine,rest in a dark room,stay hydrated,,\n",
        );
        write_dataset(
            dir.path(),
            "medications.csv",
            "Disease,Medication\nMigraine,Ibuprofen\nMigraine,Sumatriptan\n",
        );
        write_dataset(
            dir.path(),
            "diets.csv",
            "Disease,Diet\nMigraine,Regular meals and plenty of water.\n",
        );
        write_dataset(
            dir.path(),
            "workout_df.csv",
            "disease,workout\nMigraine,light stretching\nMigraine,short walks\n",
        );
        dir
    }

    #[test]
    fn loads_all_tables() {
        let dir = full_dataset_dir();
        let tables = ReferenceTables::load(dir.path());

        assert_eq!(
            tables.descriptions.get("Migraine").unwrap(),
            "A recurring headache disorder."
        );
        assert_eq!(
            tables.precautions.get("Migraine").unwrap(),
            &vec!["rest in a dark room".to_string(), "stay hydrated".to_string()]
        );
        assert_eq!(
            tables.medications.get("Migraine").unwrap(),
            &vec!["Ibuprofen".to_string(), "Sumatriptan".to_string()]
        );
        assert!(tables.diets.contains_key("Migraine"));
        assert_eq!(tables.workouts.get("Migraine").unwrap().len(), 2);
    }

    #[test]
    fn empty_precaution_cells_are_dropped() {
        let dir = full_dataset_dir();
        let tables = ReferenceTables::load(dir.path());
        let precautions = tables.precautions.get("Migraine").unwrap();
        assert_eq!(precautions.len(), 2);
        assert!(precautions.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn missing_files_leave_tables_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tables = ReferenceTables::load(dir.path());
        assert!(tables.descriptions.is_empty());
        assert!(tables.precautions.is_empty());
        assert!(tables.medications.is_empty());
        assert!(tables.diets.is_empty());
        assert!(tables.workouts.is_empty());
    }

    #[test]
    fn one_missing_file_does_not_affect_others() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "description.csv",
            "Disease,Description\nMalaria,A mosquito-borne infection.\n",
        );
        let tables = ReferenceTables::load(dir.path());
        assert_eq!(tables.descriptions.len(), 1);
        assert!(tables.medications.is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "description.csv",
            "Disease,Description\nMigraine,A recurring headache disorder.\nonly-one-field\n",
        );
        let tables = ReferenceTables::load(dir.path());
        assert_eq!(tables.descriptions.len(), 1);
    }
}
