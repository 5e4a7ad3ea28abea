use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Emotion label lookup tables.
///
/// A table supplied in TOML replaces the default table wholesale.
/// Keys are matched case-insensitively after trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Label → wellness positivity in [0, 1].
    pub positivity: BTreeMap<String, f64>,
    /// Label → valence in [-1, 1].
    pub valence: BTreeMap<String, f64>,
}

impl LexiconConfig {
    /// Canonical lookup key for a classifier label.
    pub fn normalize_label(label: &str) -> String {
        label.trim().to_lowercase()
    }

    /// Copy of these tables with every key canonicalized.
    pub fn normalized(&self) -> Self {
        let canon = |table: &BTreeMap<String, f64>| {
            table
                .iter()
                .map(|(k, v)| (Self::normalize_label(k), *v))
                .collect()
        };
        Self {
            positivity: canon(&self.positivity),
            valence: canon(&self.valence),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, value) in &self.positivity {
            if !(0.0..=1.0).contains(value) {
                return Err(ConfigError::InvalidLexiconEntry {
                    table: "positivity".to_string(),
                    label: label.clone(),
                    value: *value,
                });
            }
        }
        for (label, value) in &self.valence {
            if !(-1.0..=1.0).contains(value) {
                return Err(ConfigError::InvalidLexiconEntry {
                    table: "valence".to_string(),
                    label: label.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let build = |entries: &[(&str, f64)]| {
            entries
                .iter()
                .map(|(label, value)| (label.to_string(), *value))
                .collect()
        };
        Self {
            positivity: build(defaults::DEFAULT_POSITIVITY),
            valence: build(defaults::DEFAULT_VALENCE),
        }
    }
}
