//! The eight-field traffic observation vector: declared ranges, defaults,
//! and caller-side validation. The engine itself does not re-validate; the
//! form layer is expected to reject out-of-range input before predicting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of model input features.
pub const FEATURE_DIM: usize = 8;

/// Raw field names in canonical order. Shared by the correlation output and
/// the CSV export header.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "longitude",
    "latitude",
    "distance",
    "temperature",
    "humidity",
    "pressure",
    "hour",
    "time_duration",
];

/// Inclusive bounds for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared ranges in canonical feature order.
const RANGES: [FeatureRange; FEATURE_DIM] = [
    FeatureRange { min: -180.0, max: 180.0 }, // longitude (°)
    FeatureRange { min: -90.0, max: 90.0 },   // latitude (°)
    FeatureRange { min: 0.1, max: 50.0 },     // distance (km)
    FeatureRange { min: -30.0, max: 50.0 },   // temperature (°C)
    FeatureRange { min: 0.0, max: 100.0 },    // humidity (%)
    FeatureRange { min: 950.0, max: 1050.0 }, // pressure (hPa)
    FeatureRange { min: 0.0, max: 23.0 },     // hour
    FeatureRange { min: 1.0, max: 180.0 },    // time_duration (min)
];

/// One traffic observation: location, environment, and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub longitude: f64,
    pub latitude: f64,
    /// Distance from a major intersection (km)
    pub distance: f64,
    /// Ambient temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Atmospheric pressure (hPa)
    pub pressure: f64,
    /// Hour of day, 0-23
    pub hour: u8,
    /// Observation duration (minutes)
    pub time_duration: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            longitude: -73.9857,
            latitude: 40.7484,
            distance: 5.0,
            temperature: 25.0,
            humidity: 65.0,
            pressure: 1013.0,
            hour: 12,
            time_duration: 30.0,
        }
    }
}

impl FeatureVector {
    /// Field values in canonical order.
    pub fn values(&self) -> [f64; FEATURE_DIM] {
        [
            self.longitude,
            self.latitude,
            self.distance,
            self.temperature,
            self.humidity,
            self.pressure,
            f64::from(self.hour),
            self.time_duration,
        ]
    }

    /// Canonical-order encoding for model input.
    pub fn to_array(&self) -> [f32; FEATURE_DIM] {
        self.values().map(|v| v as f32)
    }

    /// Declared range for a field, by raw name.
    pub fn range(name: &str) -> Option<FeatureRange> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| RANGES[i])
    }

    /// Check every field against its declared range, reporting all
    /// violations. Non-finite values fail their range check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = self.values();
        let mut violations = Vec::new();
        for i in 0..FEATURE_DIM {
            if !RANGES[i].contains(values[i]) {
                violations.push(RangeViolation {
                    field: FEATURE_NAMES[i],
                    value: values[i],
                    range: RANGES[i],
                });
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

/// One out-of-range input field.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub range: FeatureRange,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} outside [{}, {}]",
            self.field, self.value, self.range.min, self.range.max
        )
    }
}

/// Input validation failure naming every out-of-range field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub violations: Vec<RangeViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "features out of range: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
