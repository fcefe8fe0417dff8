//! Classifier adapter — the uniform contract the inference engine sees,
//! plus the two implementations selected at startup.
//!
//! The production adapter wraps a frozen linear-model artifact loaded from
//! disk. When no usable artifact is present the service falls back to a
//! uniformly random classifier drawn from the registry's class ids, so the
//! rest of the pipeline can be exercised without a model. The swap is a
//! startup-time decision; callers only ever see the trait.

use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;
use thiserror::Error;

use crate::registry::ConditionRegistry;

/// Uniform prediction contract: feature vector in, class id out.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> usize;

    /// Short identifier for logs and the health endpoint.
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("artifact not found at {0}")]
    ArtifactMissing(String),

    #[error("artifact unreadable: {0}")]
    ArtifactRead(#[from] std::io::Error),

    #[error("artifact malformed: {0}")]
    ArtifactParse(String),

    #[error("class {class} weight row has length {got}, expected {expected}")]
    WeightLengthMismatch {
        class: usize,
        got: usize,
        expected: usize,
    },

    #[error("artifact contains no classes")]
    NoClasses,
}

// ═══════════════════════════════════════════════════════════
// Model-backed adapter
// ═══════════════════════════════════════════════════════════

/// One scored class in the artifact: a weight per vocabulary feature
/// plus a bias term.
#[derive(Debug, Deserialize)]
struct ClassWeights {
    class: usize,
    weights: Vec<f64>,
    #[serde(default)]
    bias: f64,
}

/// JSON weight artifact layout.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    classes: Vec<ClassWeights>,
}

/// Linear classifier over the symptom feature vector: argmax of
/// `weights · features + bias` across classes.
pub struct ModelClassifier {
    classes: Vec<ClassWeights>,
}

impl ModelClassifier {
    /// Load and validate a weight artifact. Every weight row must span the
    /// full vocabulary.
    pub fn load(path: &Path, feature_count: usize) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactMissing(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| ClassifierError::ArtifactParse(e.to_string()))?;

        if artifact.classes.is_empty() {
            return Err(ClassifierError::NoClasses);
        }
        for class in &artifact.classes {
            if class.weights.len() != feature_count {
                return Err(ClassifierError::WeightLengthMismatch {
                    class: class.class,
                    got: class.weights.len(),
                    expected: feature_count,
                });
            }
        }

        Ok(Self {
            classes: artifact.classes,
        })
    }
}

impl Classifier for ModelClassifier {
    fn predict(&self, features: &[f64]) -> usize {
        // Validated non-empty at load time; ties resolve to the first class.
        let mut best = (self.classes[0].class, f64::NEG_INFINITY);
        for class in &self.classes {
            let score: f64 = class
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + class.bias;
            if score > best.1 {
                best = (class.class, score);
            }
        }
        best.0
    }

    fn kind(&self) -> &'static str {
        "model"
    }
}

// ═══════════════════════════════════════════════════════════
// Fallback adapter
// ═══════════════════════════════════════════════════════════

/// Fallback used when no artifact is available: a uniformly random class
/// from the registry. Keeps the pipeline runnable; predictions carry no
/// signal and the confidence heuristic is the only honest output.
pub struct UniformClassifier {
    class_ids: Vec<usize>,
}

impl UniformClassifier {
    pub fn new(registry: &ConditionRegistry) -> Self {
        Self {
            class_ids: registry.class_ids(),
        }
    }
}

impl Classifier for UniformClassifier {
    fn predict(&self, _features: &[f64]) -> usize {
        let mut rng = rand::thread_rng();
        *self
            .class_ids
            .choose(&mut rng)
            .expect("registry is never empty")
    }

    fn kind(&self) -> &'static str {
        "uniform-fallback"
    }
}

// ═══════════════════════════════════════════════════════════
// Startup selection
// ═══════════════════════════════════════════════════════════

/// Pick the classifier once at startup. Artifact problems are logged and
/// masked — absence of a model is degraded service, not an error.
pub fn select_classifier(
    path: &Path,
    feature_count: usize,
    registry: &ConditionRegistry,
) -> Box<dyn Classifier> {
    match ModelClassifier::load(path, feature_count) {
        Ok(model) => {
            tracing::info!(path = %path.display(), "classifier artifact loaded");
            Box::new(model)
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "classifier artifact unavailable, using uniform fallback"
            );
            Box::new(UniformClassifier::new(registry))
        }
    }
}
