use serde::{Deserialize, Serialize};

/// Crisis detector configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Phrases screened in addition to the built-in self-harm list.
    pub extra_phrases: Vec<String>,
}
