//! The four traffic severity levels. Closed set; display metadata is fixed
//! and never extended at runtime.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeverityClass {
    Minimal = 0,
    Minor = 1,
    Moderate = 2,
    Severe = 3,
}

impl SeverityClass {
    pub const ALL: [SeverityClass; 4] = [
        SeverityClass::Minimal,
        SeverityClass::Minor,
        SeverityClass::Moderate,
        SeverityClass::Severe,
    ];

    /// Map a raw classifier output into the severity domain.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Minimal),
            1 => Some(Self::Minor),
            2 => Some(Self::Moderate),
            3 => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Display color (hex) for result cards and charts.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Minimal => "#4CAF50",
            Self::Minor => "#FFC107",
            Self::Moderate => "#FF9800",
            Self::Severe => "#F44336",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal impact on traffic flow",
            Self::Minor => "Minor delays and slowdowns",
            Self::Moderate => "Moderate congestion affecting travel time",
            Self::Severe => "Severe congestion with significant delays",
        }
    }
}

impl From<SeverityClass> for u8 {
    fn from(class: SeverityClass) -> Self {
        class as u8
    }
}

impl TryFrom<u8> for SeverityClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(i64::from(value))
            .ok_or_else(|| format!("severity class {} outside 0..=3", value))
    }
}
