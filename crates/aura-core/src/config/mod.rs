pub mod defaults;
pub mod discrepancy_config;
pub mod fusion_config;
pub mod lexicon_config;
pub mod observability_config;
pub mod safety_config;
pub mod session_config;

pub use discrepancy_config::DiscrepancyConfig;
pub use fusion_config::{FusionConfig, ModalityWeights, RiskThresholds};
pub use lexicon_config::LexiconConfig;
pub use observability_config::ObservabilityConfig;
pub use safety_config::SafetyConfig;
pub use session_config::SessionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AuraResult, ConfigError};

/// Top-level configuration, one section per subsystem.
///
/// Supplied at construction time; nothing is read from the environment
/// at call time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    pub fusion: FusionConfig,
    pub discrepancy: DiscrepancyConfig,
    pub session: SessionConfig,
    pub safety: SafetyConfig,
    pub lexicon: LexiconConfig,
    pub observability: ObservabilityConfig,
}

impl AuraConfig {
    /// Parse a TOML document and validate it. Missing sections and keys take defaults.
    pub fn from_toml(toml_str: &str) -> AuraResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fusion.validate()?;
        self.discrepancy.validate()?;
        self.session.validate()?;
        self.lexicon.validate()
    }
}
