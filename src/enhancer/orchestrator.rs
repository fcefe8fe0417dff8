//! Enhancement orchestration — the Disabled/Enabled state machine and the
//! field-wise merge policy.

use crate::config::Settings;
use crate::enrichment::BaselineInfo;
use crate::registry::Severity;

use super::client::{GeminiClient, GenerateClient};
use super::fallback::{
    build_fallback_record, GENERIC_CONSULTATION_ADVICE, GENERIC_HOME_REMEDIES,
    GENERIC_TRADITIONAL_MEDICINES,
};
use super::parser::{extract_enhancement, parse_severity, JsonExtraction, ParsedEnhancement};
use super::prompt::build_enhancement_prompt;
use super::types::EnrichmentRecord;

/// Two-state AI enhancer. The state is fixed at construction: `None`
/// means Disabled for the process lifetime, and the disabled path never
/// touches the network.
pub struct AiEnhancer {
    client: Option<Box<dyn GenerateClient>>,
}

impl AiEnhancer {
    /// Permanently disabled enhancer (no credential, or self-test failed).
    pub fn disabled() -> Self {
        Self { client: None }
    }

    /// Enabled enhancer over an already-verified client.
    pub fn enabled(client: Box<dyn GenerateClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Startup wiring: build a client from settings and run the one-shot
    /// connectivity self-test. Any problem resolves to Disabled — AI
    /// unavailability is degraded service, never an error.
    pub fn init(settings: &Settings) -> Self {
        if settings.gemini_api_key.is_empty() {
            tracing::warn!("no generation API key configured, AI enhancement disabled");
            return Self::disabled();
        }

        let client = GeminiClient::new(
            &settings.gemini_base_url,
            &settings.gemini_api_key,
            &settings.gemini_model,
            settings.ai_timeout_secs,
        );

        match client.self_test() {
            Ok(()) => {
                tracing::info!(model = %settings.gemini_model, "AI enhancement enabled");
                Self::enabled(Box::new(client))
            }
            Err(err) => {
                tracing::warn!(%err, "generation self-test failed, AI enhancement disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Enrich a prediction. Exactly one outbound call when enabled; every
    /// failure mode (transport, status, empty body, missing or malformed
    /// JSON) resolves to the fallback record for this condition.
    pub fn enhance(
        &self,
        condition: &str,
        raw_symptoms: &str,
        baseline: &BaselineInfo,
    ) -> EnrichmentRecord {
        let client = match &self.client {
            Some(client) => client,
            None => return build_fallback_record(condition, baseline),
        };

        let prompt = build_enhancement_prompt(condition, raw_symptoms);
        let response = match client.generate(&prompt) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%condition, %err, "generation call failed, using fallback");
                return build_fallback_record(condition, baseline);
            }
        };

        match extract_enhancement(&response) {
            JsonExtraction::Object(parsed) => merge(parsed, baseline),
            JsonExtraction::Malformed => {
                tracing::warn!(%condition, "malformed JSON in generation response, using fallback");
                build_fallback_record(condition, baseline)
            }
            JsonExtraction::Absent => {
                tracing::warn!(%condition, "no JSON object in generation response, using fallback");
                build_fallback_record(condition, baseline)
            }
        }
    }
}

/// Field-wise merge of parsed guidance over the baseline.
///
/// description, precautions, medications, diet and workouts fall back to
/// the baseline when the model omits them; traditional medicines, home
/// remedies and consultation advice fall back to generic content (the
/// baseline has no analogous fields). Severity is taken verbatim when it
/// names a valid tier, else Moderate — deliberately ignoring the
/// baseline's computed tier.
fn merge(parsed: ParsedEnhancement, baseline: &BaselineInfo) -> EnrichmentRecord {
    EnrichmentRecord {
        description: parsed
            .description
            .unwrap_or_else(|| baseline.description.clone()),
        severity: parsed
            .severity
            .as_deref()
            .and_then(parse_severity)
            .unwrap_or(Severity::Moderate),
        precautions: parsed
            .precautions
            .unwrap_or_else(|| baseline.precautions.clone()),
        medications: parsed
            .medications
            .unwrap_or_else(|| baseline.medications.clone()),
        traditional_medicines: parsed.traditional_medicines.unwrap_or_else(|| {
            GENERIC_TRADITIONAL_MEDICINES
                .iter()
                .map(|s| s.to_string())
                .collect()
        }),
        home_remedies: parsed.home_remedies.unwrap_or_else(|| {
            GENERIC_HOME_REMEDIES.iter().map(|s| s.to_string()).collect()
        }),
        diet: parsed.diet.unwrap_or_else(|| baseline.diet.clone()),
        workouts: parsed.workouts.unwrap_or_else(|| baseline.workouts.clone()),
        consultation_advice: parsed
            .consultation_advice
            .unwrap_or_else(|| GENERIC_CONSULTATION_ADVICE.to_string()),
    }
}
