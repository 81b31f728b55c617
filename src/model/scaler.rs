//! Standard-score feature scaler exported from training as JSON:
//! `{ "mean": [f64; 8], "scale": [f64; 8] }`.

use super::ArtifactError;
use crate::features::FEATURE_DIM;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FeatureScaler {
    /// Load from JSON and check shape. Wrong arity or degenerate entries are
    /// a corrupt artifact, not an absent one.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let data = std::fs::read_to_string(path).map_err(|e| ArtifactError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let scaler: FeatureScaler =
            serde_json::from_str(&data).map_err(|e| ArtifactError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        scaler.check()?;
        Ok(scaler)
    }

    fn check(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != FEATURE_DIM || self.scale.len() != FEATURE_DIM {
            return Err(ArtifactError::Shape(format!(
                "arity {}/{}, expected {}",
                self.mean.len(),
                self.scale.len(),
                FEATURE_DIM
            )));
        }
        if let Some(i) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(ArtifactError::Shape(format!(
                "mean[{}] = {} is not finite",
                i, self.mean[i]
            )));
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ArtifactError::Shape(format!(
                "scale[{}] = {} is degenerate",
                i, self.scale[i]
            )));
        }
        Ok(())
    }

    /// `(x - mean) / scale` in canonical feature order.
    pub fn transform(&self, input: &[f32; FEATURE_DIM]) -> [f32; FEATURE_DIM] {
        let mut out = [0.0f32; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            out[i] = ((f64::from(input[i]) - self.mean[i]) / self.scale[i]) as f32;
        }
        out
    }
}
