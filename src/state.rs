//! Service context — explicit, dependency-injected wiring of the
//! pipeline components.
//!
//! Built once at startup from `Settings` and shared across requests via
//! `Arc`. Everything in here is read-only after construction; the only
//! mutable shared structure (the rate limiter) lives in the API context.

use std::sync::Arc;

use crate::classifier::select_classifier;
use crate::config::Settings;
use crate::enhancer::{AiEnhancer, EnrichmentRecord};
use crate::enrichment::{EnrichmentRepository, ReferenceTables};
use crate::inference::InferenceEngine;
use crate::registry::{ConditionEntry, ConditionRegistry};
use crate::vocabulary::{SymptomEntry, SymptomVocabulary};

/// Provenance tag when AI enhancement was enabled for the call.
pub const SOURCE_ML_AI: &str = "ML+AI";
/// Provenance tag when only the reference pipeline ran.
pub const SOURCE_ML: &str = "ML";

/// One fully enriched prediction, ready for response assembly.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub condition: String,
    pub confidence: f64,
    pub record: EnrichmentRecord,
    pub source: &'static str,
}

/// Process-wide pipeline state.
pub struct ServiceState {
    engine: InferenceEngine,
    repository: EnrichmentRepository,
    enhancer: AiEnhancer,
}

impl ServiceState {
    /// Build the full pipeline from settings: static tables, classifier
    /// selection, dataset loading, and the enhancer self-test. Performs
    /// blocking I/O; call before the async runtime takes over.
    pub fn init(settings: &Settings) -> Self {
        let vocabulary = SymptomVocabulary::new();
        let registry = ConditionRegistry::new();
        let classifier = select_classifier(&settings.model_path, vocabulary.len(), &registry);
        let engine = InferenceEngine::new(vocabulary, registry, classifier);

        let tables = Arc::new(ReferenceTables::load(&settings.datasets_dir));
        let repository = EnrichmentRepository::new(tables);

        let enhancer = AiEnhancer::init(settings);

        Self {
            engine,
            repository,
            enhancer,
        }
    }

    /// Assemble a state from pre-built parts (test wiring).
    pub fn with_parts(
        engine: InferenceEngine,
        repository: EnrichmentRepository,
        enhancer: AiEnhancer,
    ) -> Self {
        Self {
            engine,
            repository,
            enhancer,
        }
    }

    /// Run the whole pipeline for one request: infer → baseline lookup →
    /// enhance. `None` means no symptom was recognized — a client-input
    /// outcome the boundary must map to a 4xx, never a default condition.
    pub fn predict(&self, raw_symptoms: &str) -> Option<PredictionOutcome> {
        let prediction = self.engine.infer(raw_symptoms)?;
        let baseline = self.repository.lookup(&prediction.condition);
        let record = self
            .enhancer
            .enhance(&prediction.condition, raw_symptoms, &baseline);

        let source = if self.enhancer.is_enabled() {
            SOURCE_ML_AI
        } else {
            SOURCE_ML
        };

        Some(PredictionOutcome {
            condition: prediction.condition,
            confidence: prediction.confidence,
            record,
            source,
        })
    }

    pub fn symptoms(&self) -> Vec<SymptomEntry> {
        self.engine.vocabulary().list()
    }

    pub fn conditions(&self) -> Vec<ConditionEntry> {
        self.engine.registry().list()
    }

    pub fn classifier_kind(&self) -> &'static str {
        self.engine.classifier_kind()
    }

    pub fn ai_enabled(&self) -> bool {
        self.enhancer.is_enabled()
    }
}
