//! One-time artifact resolution. The outcome is a tagged state: loaded,
//! absent (expected, triggers the rule fallback), or corrupt (reported on
//! every predict call, never silently replaced by the fallback).

use super::{FeatureScaler, SeverityClassifier};
use crate::config::ModelConfig;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scaler shape: {0}")]
    Shape(String),
    #[error("classifier load: {0}")]
    Session(#[from] ort::Error),
}

/// Result of the one-time artifact load.
pub enum ArtifactState {
    Loaded {
        classifier: SeverityClassifier,
        scaler: FeatureScaler,
    },
    Absent,
    Corrupt(String),
}

impl ArtifactState {
    /// Attempt the load. Missing files yield `Absent`; files that exist but
    /// fail to deserialize or have the wrong shape yield `Corrupt`.
    pub fn load(config: &ModelConfig) -> ArtifactState {
        if !config.classifier_path.exists() || !config.scaler_path.exists() {
            tracing::warn!(
                classifier = %config.classifier_path.display(),
                scaler = %config.scaler_path.display(),
                "model artifacts not found; rule fallback active"
            );
            return ArtifactState::Absent;
        }

        let scaler = match FeatureScaler::load(&config.scaler_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "scaler artifact corrupt");
                return ArtifactState::Corrupt(e.to_string());
            }
        };

        let classifier = match SeverityClassifier::load(&config.classifier_path)
            .map_err(ArtifactError::Session)
        {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "classifier artifact corrupt");
                return ArtifactState::Corrupt(e.to_string());
            }
        };

        tracing::info!(
            classifier = %config.classifier_path.display(),
            "model artifacts loaded"
        );
        ArtifactState::Loaded { classifier, scaler }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ArtifactState::Loaded { .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ArtifactState::Absent)
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, ArtifactState::Corrupt(_))
    }
}
