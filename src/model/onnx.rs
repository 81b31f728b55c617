//! ONNX classifier session: `[1, 8]` f32 in, integer class label out.
//! Uses the `ort` crate; the first session output is the label tensor.

use crate::features::FEATURE_DIM;
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use std::fmt;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug)]
pub struct InferenceError(pub String);

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InferenceError {}

pub struct SeverityClassifier {
    session: Mutex<Session>,
}

impl SeverityClassifier {
    /// Load the serialized classifier. The caller decides whether a missing
    /// file is absent or an error; this only runs on an existing path.
    pub fn load(path: &Path) -> Result<Self, ort::Error> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(path)?;
        Ok(Self {
            session: Mutex::new(session),
        })
    }

    /// Run the classifier on a scaled vector; returns the raw class label.
    pub fn predict(&self, scaled: &[f32; FEATURE_DIM]) -> Result<i64, InferenceError> {
        let mut session = self.session.lock().expect("lock");

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError("no output defined".to_string()))?;

        let arr = Array2::<f32>::from_shape_vec((1, FEATURE_DIM), scaled.to_vec())
            .map_err(|e| InferenceError(format!("input shape: {}", e)))?;
        let input = Value::from_array(arr)
            .map_err(|e| InferenceError(format!("input tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError(format!("session run: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("no output".to_string()))?;

        let labels = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("extract label: {}", e)))?;

        labels
            .1
            .first()
            .copied()
            .ok_or_else(|| InferenceError("empty label tensor".to_string()))
    }
}
