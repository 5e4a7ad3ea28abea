use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Discrepancy analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscrepancyConfig {
    /// A pair is flagged when its valence distance exceeds this.
    pub flag_distance: f64,
    /// A flagged pair is high severity when its distance exceeds this.
    pub high_distance: f64,
}

impl DiscrepancyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0 <= self.flag_distance && self.flag_distance <= self.high_distance) {
            return Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "discrepancy thresholds must satisfy 0 <= flag_distance ({}) <= high_distance ({})",
                    self.flag_distance, self.high_distance
                ),
            });
        }
        Ok(())
    }
}

impl Default for DiscrepancyConfig {
    fn default() -> Self {
        Self {
            flag_distance: defaults::DEFAULT_FLAG_DISTANCE,
            high_distance: defaults::DEFAULT_HIGH_DISTANCE,
        }
    }
}
