use serde::Serialize;

use crate::registry::Severity;

/// The unified enrichment output for one prediction, assembled either from
/// the AI merge path or from the deterministic fallback. Built fresh per
/// request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRecord {
    pub description: String,
    pub severity: Severity,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    pub traditional_medicines: Vec<String>,
    pub home_remedies: Vec<String>,
    pub diet: String,
    pub workouts: Vec<String>,
    pub consultation_advice: String,
}
