use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::adjustment::SignalAdjustment;
use super::modality::Modality;

/// Coarse risk classification. Risk is the inverse of wellness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one fusion call. Built fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FusionResult {
    /// Weighted wellness score in [0, 1]; higher is better.
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    /// Wellness contribution of each present modality, before weighting.
    pub per_modality_contribution: BTreeMap<Modality, f64>,
    /// Renormalized weights actually applied (sum to 1.0).
    pub weights_used: BTreeMap<Modality, f64>,
    /// Weighted mean of the clamped classifier confidences.
    pub overall_confidence: f64,
    /// Human-readable description of the score band.
    pub analysis: String,
    pub adjustments: Vec<SignalAdjustment>,
}
