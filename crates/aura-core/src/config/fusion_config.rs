use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::Modality;

/// Base fusion weight per modality. Non-negative; need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalityWeights {
    pub text: f64,
    pub voice: f64,
    pub face: f64,
}

impl ModalityWeights {
    /// Base weight configured for a modality.
    pub fn get(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Text => self.text,
            Modality::Voice => self.voice,
            Modality::Face => self.face,
        }
    }

    /// All (modality, weight) pairs in canonical modality order.
    pub fn iter(&self) -> impl Iterator<Item = (Modality, f64)> + '_ {
        Modality::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (modality, value) in self.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    modality: modality.to_string(),
                    value,
                });
            }
        }
        if self.iter().all(|(_, w)| w == 0.0) {
            return Err(ConfigError::NoPositiveWeight);
        }
        Ok(())
    }
}

impl Default for ModalityWeights {
    fn default() -> Self {
        Self {
            text: defaults::DEFAULT_TEXT_WEIGHT,
            voice: defaults::DEFAULT_VOICE_WEIGHT,
            face: defaults::DEFAULT_FACE_WEIGHT,
        }
    }
}

/// Upper bounds (inclusive) of the high and medium risk bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// `overall_score <= high_max` maps to high risk.
    pub high_max: f64,
    /// `high_max < overall_score <= medium_max` maps to medium risk.
    pub medium_max: f64,
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0.0 <= self.high_max
            && self.high_max <= self.medium_max
            && self.medium_max <= 1.0;
        if !ordered {
            return Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "risk thresholds must satisfy 0 <= high_max ({}) <= medium_max ({}) <= 1",
                    self.high_max, self.medium_max
                ),
            });
        }
        Ok(())
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_max: defaults::DEFAULT_HIGH_RISK_MAX,
            medium_max: defaults::DEFAULT_MEDIUM_RISK_MAX,
        }
    }
}

/// Fusion engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub weights: ModalityWeights,
    pub risk: RiskThresholds,
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.risk.validate()
    }
}
