//! Prediction engine: scaled classifier inference when artifacts are loaded,
//! deterministic rule fallback when they are absent.

use crate::config::ModelConfig;
use crate::features::FeatureVector;
use crate::model::ArtifactState;
use crate::severity::SeverityClass;
use std::sync::OnceLock;
use thiserror::Error;

/// Hours the fallback policy treats as rush hour.
const RUSH_HOURS: [u8; 6] = [7, 8, 9, 16, 17, 18];

#[derive(Debug, Clone, Error)]
pub enum PredictError {
    #[error("model artifact corrupt: {0}")]
    ArtifactCorrupt(String),
    #[error("feature scaling failed: {0}")]
    Scaling(String),
    #[error("classification failed: {0}")]
    Classification(String),
}

pub struct SeverityEngine {
    config: ModelConfig,
    artifacts: OnceLock<ArtifactState>,
}

impl SeverityEngine {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            artifacts: OnceLock::new(),
        }
    }

    /// Resolve artifacts, loading them on first use. The outcome, including
    /// a failed load, is cached for the lifetime of the engine.
    fn artifacts(&self) -> &ArtifactState {
        self.artifacts
            .get_or_init(|| ArtifactState::load(&self.config))
    }

    /// Whether a trained classifier is active (false means rule fallback or
    /// corrupt artifacts).
    pub fn model_loaded(&self) -> bool {
        self.artifacts().is_loaded()
    }

    /// Predict the severity class for a validated feature vector.
    ///
    /// Absent artifacts route to the rule policy. Corrupt artifacts and
    /// inference faults are reported as errors; a loaded-but-erroring model
    /// never falls back to the rules.
    pub fn predict(&self, features: &FeatureVector) -> Result<SeverityClass, PredictError> {
        match self.artifacts() {
            ArtifactState::Absent => Ok(fallback_severity(features)),
            ArtifactState::Corrupt(msg) => Err(PredictError::ArtifactCorrupt(msg.clone())),
            ArtifactState::Loaded { classifier, scaler } => {
                let scaled = scaler.transform(&features.to_array());
                if scaled.iter().any(|v| !v.is_finite()) {
                    return Err(PredictError::Scaling(
                        "non-finite value after transform".to_string(),
                    ));
                }
                let raw = classifier
                    .predict(&scaled)
                    .map_err(|e| PredictError::Classification(e.to_string()))?;
                tracing::debug!(class = raw, "classifier prediction");
                SeverityClass::from_raw(raw).ok_or_else(|| {
                    PredictError::Classification(format!(
                        "class {} outside severity domain",
                        raw
                    ))
                })
            }
        }
    }
}

/// Rule policy used when no trained artifacts exist. Considers only hour,
/// distance, and duration; precedence order is fixed.
pub fn fallback_severity(f: &FeatureVector) -> SeverityClass {
    if RUSH_HOURS.contains(&f.hour) && f.distance < 10.0 {
        if f.time_duration > 60.0 {
            SeverityClass::Severe
        } else if f.time_duration > 30.0 {
            SeverityClass::Moderate
        } else {
            SeverityClass::Minor
        }
    } else if f.distance > 30.0 || f.time_duration < 15.0 {
        SeverityClass::Minimal
    } else {
        SeverityClass::Minor
    }
}
