//! Bounded FIFO history of prediction records, plus the aggregate views the
//! host renders: severity distribution, feature/severity correlation, and
//! CSV export.

use crate::features::{FeatureVector, FEATURE_DIM, FEATURE_NAMES};
use crate::severity::SeverityClass;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Retained records per session.
pub const DEFAULT_CAPACITY: usize = 50;

/// Correlations are not reported below this many records.
pub const MIN_CORRELATION_SAMPLES: usize = 5;

/// One completed prediction, frozen at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(flatten)]
    pub features: FeatureVector,
    pub severity_class: SeverityClass,
    pub severity_label: String,
    pub timestamp: DateTime<Utc>,
}

impl PredictionRecord {
    /// Freeze one prediction with its class label and creation time
    /// (second precision).
    pub fn new(features: FeatureVector, severity: SeverityClass) -> Self {
        let now = Utc::now();
        Self {
            features,
            severity_class: severity,
            severity_label: severity.label().to_string(),
            timestamp: now.with_nanosecond(0).unwrap_or(now),
        }
    }
}

/// Append-only record list capped at a fixed capacity; the oldest record is
/// evicted first. One instance per session.
pub struct HistoryStore {
    capacity: usize,
    records: VecDeque<PredictionRecord>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, record: PredictionRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Current contents in insertion order. Empty is a valid result.
    pub fn snapshot(&self) -> Vec<PredictionRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Count records per severity class. Every class is present in the result so
/// chart rendering stays stable when a class has no records yet.
pub fn severity_distribution(
    records: &[PredictionRecord],
) -> BTreeMap<SeverityClass, usize> {
    let mut counts: BTreeMap<SeverityClass, usize> =
        SeverityClass::ALL.iter().map(|c| (*c, 0)).collect();
    for r in records {
        *counts.entry(r.severity_class).or_insert(0) += 1;
    }
    counts
}

/// Absolute Pearson correlation of each feature against the class ordinal,
/// sorted descending. `None` below [`MIN_CORRELATION_SAMPLES`] records —
/// insufficient data is not reported as zeros.
pub fn feature_correlations(
    records: &[PredictionRecord],
) -> Option<Vec<(&'static str, f64)>> {
    if records.len() < MIN_CORRELATION_SAMPLES {
        return None;
    }

    let rows: Vec<[f64; FEATURE_DIM]> = records.iter().map(|r| r.features.values()).collect();
    let classes: Vec<f64> = records
        .iter()
        .map(|r| f64::from(u8::from(r.severity_class)))
        .collect();

    let mut out: Vec<(&'static str, f64)> = FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<f64> = rows.iter().map(|row| row[i]).collect();
            (*name, pearson(&values, &classes).abs())
        })
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    Some(out)
}

/// Pearson r; 0.0 when either side has zero variance (undefined correlation
/// would otherwise poison the sort order).
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

/// Render records as CSV in snapshot order: header row with the raw field
/// names, then one row per record.
pub fn export_csv(records: &[PredictionRecord]) -> Vec<u8> {
    let mut out = String::new();
    for name in FEATURE_NAMES {
        out.push_str(name);
        out.push(',');
    }
    out.push_str("severity_class,severity_label,timestamp\n");

    for r in records {
        for value in r.features.values() {
            out.push_str(&value.to_string());
            out.push(',');
        }
        out.push_str(&u8::from(r.severity_class).to_string());
        out.push(',');
        out.push_str(&csv_field(&r.severity_label));
        out.push(',');
        out.push_str(&csv_field(
            &r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        ));
        out.push('\n');
    }
    out.into_bytes()
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
