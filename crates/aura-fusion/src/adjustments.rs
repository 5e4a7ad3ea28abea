//! Non-fatal normalization record.
//!
//! Clamped values and unknown labels never block scoring; each one is
//! logged and kept so the result can be audited.

use aura_core::models::{Modality, SignalAdjustment};
use aura_observability::events;

/// Accumulates adjustments during a single fusion or analysis pass.
#[derive(Debug, Default)]
pub struct AdjustmentTracker {
    adjustments: Vec<SignalAdjustment>,
}

impl AdjustmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an out-of-range value that was clamped into [0, 1].
    pub fn record_clamp(&mut self, modality: Modality, field: &str, original: f64, clamped: f64) {
        events::value_clamped(modality.as_str(), field, original, clamped);
        self.adjustments.push(SignalAdjustment::Clamped {
            modality,
            field: field.to_string(),
            original,
            clamped,
        });
    }

    /// Record a label that fell back to the neutral value of `table`.
    pub fn record_unknown_label(&mut self, modality: Modality, label: &str, table: &str) {
        events::unknown_label(modality.as_str(), label, table);
        self.adjustments.push(SignalAdjustment::UnknownLabel {
            modality,
            label: label.to_string(),
            table: table.to_string(),
        });
    }

    pub fn adjustments(&self) -> &[SignalAdjustment] {
        &self.adjustments
    }

    pub fn len(&self) -> usize {
        self.adjustments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }

    pub fn into_adjustments(self) -> Vec<SignalAdjustment> {
        self.adjustments
    }
}
