//! Structured JSON logging for the engine and its host.

mod format;

pub use format::{LogEvent, StructuredLogger};
