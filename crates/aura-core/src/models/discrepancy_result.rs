use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::Modality;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DiscrepancySeverity {
    Low,
    Medium,
    High,
}

impl DiscrepancySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscrepancySeverity::Low => "low",
            DiscrepancySeverity::Medium => "medium",
            DiscrepancySeverity::High => "high",
        }
    }
}

impl fmt::Display for DiscrepancySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged disagreement between two modalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PairwiseDiscrepancy {
    /// Modalities in canonical order.
    pub pair: (Modality, Modality),
    /// Labels of `pair.0` and `pair.1` respectively.
    pub labels: (String, String),
    pub distance: f64,
    pub severity: DiscrepancySeverity,
}

/// Cross-modality agreement for one set of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscrepancyResult {
    pub detected: bool,
    /// Maximum severity across flagged pairs; `low` when none.
    pub severity: DiscrepancySeverity,
    /// Flagged pairs only.
    pub pairwise: Vec<PairwiseDiscrepancy>,
    pub recommendation: String,
}
