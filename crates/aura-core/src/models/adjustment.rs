use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::Modality;

/// A non-fatal correction applied while normalizing a reading.
///
/// These never block the pipeline; they are carried on the result for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SignalAdjustment {
    /// A score or confidence outside `[0, 1]` was clamped.
    Clamped {
        modality: Modality,
        field: String,
        original: f64,
        clamped: f64,
    },
    /// A label missing from a lookup table fell back to neutral.
    UnknownLabel {
        modality: Modality,
        label: String,
        table: String,
    },
}

impl SignalAdjustment {
    pub fn modality(&self) -> Modality {
        match self {
            SignalAdjustment::Clamped { modality, .. }
            | SignalAdjustment::UnknownLabel { modality, .. } => *modality,
        }
    }
}
