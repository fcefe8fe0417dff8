//! Inference engine — symptom parsing, feature encoding, and classifier
//! invocation with confidence scoring.

use crate::classifier::Classifier;
use crate::registry::ConditionRegistry;
use crate::vocabulary::{canonicalize, SymptomVocabulary};

/// Confidence cap; the heuristic never claims more than this.
const CONFIDENCE_CAP: f64 = 0.95;
/// Confidence floor for a single recognized symptom.
const CONFIDENCE_BASE: f64 = 0.6;
/// Confidence gained per additional recognized symptom.
const CONFIDENCE_STEP: f64 = 0.1;

/// Result of a successful inference.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub condition: String,
    /// Heuristic score rewarding corroborating symptoms — NOT a calibrated
    /// probability. `min(0.95, 0.6 + 0.1 * matched)`.
    pub confidence: f64,
    /// How many input tokens were recognized by the vocabulary.
    pub matched_symptoms: usize,
}

/// Orchestrates parse → encode → classify → registry lookup.
pub struct InferenceEngine {
    vocabulary: SymptomVocabulary,
    registry: ConditionRegistry,
    classifier: Box<dyn Classifier>,
}

impl InferenceEngine {
    pub fn new(
        vocabulary: SymptomVocabulary,
        registry: ConditionRegistry,
        classifier: Box<dyn Classifier>,
    ) -> Self {
        Self {
            vocabulary,
            registry,
            classifier,
        }
    }

    /// Map a raw comma-delimited symptom string to a predicted condition.
    ///
    /// Tokens are canonicalized; unrecognized tokens are silently dropped
    /// (spelling and variant mismatches are expected in real input). Returns
    /// `None` when nothing matched — a client-input outcome, not a fault.
    pub fn infer(&self, raw_symptoms: &str) -> Option<Prediction> {
        let mut features = vec![0.0; self.vocabulary.len()];
        let mut matched = 0usize;

        for token in raw_symptoms.split(',') {
            let canonical = canonicalize(token);
            if canonical.is_empty() {
                continue;
            }
            match self.vocabulary.index_of(&canonical) {
                Some(index) => {
                    if features[index] == 0.0 {
                        matched += 1;
                    }
                    features[index] = 1.0;
                }
                None => {
                    tracing::debug!(token = %canonical, "unrecognized symptom dropped");
                }
            }
        }

        if matched == 0 {
            return None;
        }

        let class = self.classifier.predict(&features);
        let condition = self.registry.name_for(class).to_string();
        let confidence = confidence_for(matched);

        tracing::info!(%condition, confidence, matched, "inference complete");

        Some(Prediction {
            condition,
            confidence,
            matched_symptoms: matched,
        })
    }

    /// Which classifier implementation is active (for health reporting).
    pub fn classifier_kind(&self) -> &'static str {
        self.classifier.kind()
    }

    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    pub fn registry(&self) -> &ConditionRegistry {
        &self.registry
    }
}

/// Capped, monotonically non-decreasing confidence heuristic.
fn confidence_for(matched: usize) -> f64 {
    (CONFIDENCE_BASE + CONFIDENCE_STEP * matched as f64).min(CONFIDENCE_CAP)
}
