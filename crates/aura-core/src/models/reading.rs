use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::Modality;

/// Clamp a value into `[0, 1]`. NaN maps to 0.0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// A single classifier output for one modality.
///
/// Values are stored as produced; out-of-range `score`/`confidence` are
/// clamped at normalization time, never rejected. For voice, `score` is the
/// stress score (higher means more stressed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModalityReading {
    pub modality: Modality,
    pub label: String,
    pub score: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl ModalityReading {
    pub fn new(modality: Modality, label: impl Into<String>, score: f64, confidence: f64) -> Self {
        Self {
            modality,
            label: label.into(),
            score,
            confidence,
            timestamp: Utc::now(),
        }
    }

    pub fn text(label: impl Into<String>, score: f64, confidence: f64) -> Self {
        Self::new(Modality::Text, label, score, confidence)
    }

    pub fn voice(label: impl Into<String>, stress_score: f64, confidence: f64) -> Self {
        Self::new(Modality::Voice, label, stress_score, confidence)
    }

    pub fn face(label: impl Into<String>, score: f64, confidence: f64) -> Self {
        Self::new(Modality::Face, label, score, confidence)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
