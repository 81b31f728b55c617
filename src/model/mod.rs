//! Classifier and scaler artifacts: JSON scaler, ONNX classifier session,
//! and the tagged one-time load state.

mod artifacts;
mod onnx;
mod scaler;

pub use artifacts::{ArtifactError, ArtifactState};
pub use onnx::SeverityClassifier;
pub use scaler::FeatureScaler;
