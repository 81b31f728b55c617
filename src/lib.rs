//! Severity Engine — traffic severity prediction core.
//!
//! Modular structure:
//! - [`features`] — The 8-field observation vector, declared ranges, validation
//! - [`severity`] — The four-level severity class and its display metadata
//! - [`model`] — One-time cached classifier/scaler artifact loading
//! - [`engine`] — Prediction engine: scaled inference or rule fallback
//! - [`history`] — Bounded FIFO of prediction records and aggregate views
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod engine;
pub mod features;
pub mod history;
pub mod logging;
pub mod model;
pub mod severity;

pub use config::EngineConfig;
pub use engine::{PredictError, SeverityEngine};
pub use features::FeatureVector;
pub use history::{HistoryStore, PredictionRecord};
pub use logging::StructuredLogger;
pub use model::ArtifactState;
pub use severity::SeverityClass;
