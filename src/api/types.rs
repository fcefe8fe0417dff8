//! Shared context and wire schemas for the API layer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::enhancer::EnrichmentRecord;
use crate::limiter::RateLimiter;
use crate::state::{PredictionOutcome, ServiceState};

/// Shared context for all routes and middleware. The service state is
/// read-only; the rate limiter is the only mutable shared structure.
#[derive(Clone)]
pub struct ApiContext {
    pub service: Arc<ServiceState>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl ApiContext {
    pub fn new(service: Arc<ServiceState>, settings: &Settings) -> Self {
        Self {
            service,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(
                settings.rate_quota,
                Duration::from_secs(settings.rate_window_secs),
            ))),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Wire schemas
// ═══════════════════════════════════════════════════════════

/// Inbound prediction request: a comma-delimited symptom string.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: String,
}

/// Bounds and placeholder checks on the raw symptom string. Rejects
/// before any pipeline work happens.
pub fn validate_symptoms(symptoms: &str) -> Result<(), String> {
    let trimmed = symptoms.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("symptoms") {
        return Err("Please provide valid symptoms".to_string());
    }
    if symptoms.len() > 1000 {
        return Err("Symptom input must be at most 1000 characters".to_string());
    }
    Ok(())
}

/// Outbound prediction response: the enrichment record plus provenance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub condition: String,
    #[serde(flatten)]
    pub record: EnrichmentRecord,
    pub confidence: f64,
    pub source: &'static str,
}

impl From<PredictionOutcome> for PredictionResponse {
    fn from(outcome: PredictionOutcome) -> Self {
        Self {
            condition: outcome.condition,
            record: outcome.record,
            confidence: outcome.confidence,
            source: outcome.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Severity;

    #[test]
    fn empty_and_placeholder_inputs_rejected() {
        assert!(validate_symptoms("").is_err());
        assert!(validate_symptoms("   ").is_err());
        assert!(validate_symptoms("symptoms").is_err());
        assert!(validate_symptoms(" Symptoms ").is_err());
    }

    #[test]
    fn oversized_input_rejected() {
        let long = "a".repeat(1001);
        assert!(validate_symptoms(&long).is_err());
        let max = "a".repeat(1000);
        assert!(validate_symptoms(&max).is_ok());
    }

    #[test]
    fn normal_input_accepted() {
        assert!(validate_symptoms("headache, nausea").is_ok());
    }

    #[test]
    fn response_serializes_flat_camel_case() {
        let response = PredictionResponse {
            condition: "Migraine".into(),
            record: EnrichmentRecord {
                description: "desc".into(),
                severity: Severity::Moderate,
                precautions: vec!["rest".into()],
                medications: vec![],
                traditional_medicines: vec![],
                home_remedies: vec![],
                diet: "diet".into(),
                workouts: vec![],
                consultation_advice: "advice".into(),
            },
            confidence: 0.8,
            source: "ML",
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["condition"], "Migraine");
        assert_eq!(json["severity"], "Moderate");
        assert_eq!(json["traditionalMedicines"], serde_json::json!([]));
        assert_eq!(json["homeRemedies"], serde_json::json!([]));
        assert_eq!(json["consultationAdvice"], "advice");
        assert_eq!(json["source"], "ML");
        // Flattened: no nested "record" object
        assert!(json.get("record").is_none());
    }
}
