use std::collections::BTreeMap;

use aura_core::config::LexiconConfig;
use aura_core::constants::NEUTRAL_VALENCE;

/// Emotion label → valence in [-1, 1].
#[derive(Debug, Clone)]
pub struct ValenceScale {
    table: BTreeMap<String, f64>,
}

impl ValenceScale {
    pub fn new(lexicon: &LexiconConfig) -> Self {
        Self {
            table: lexicon.normalized().valence,
        }
    }

    /// Valence of a label, if the table knows it.
    pub fn lookup(&self, label: &str) -> Option<f64> {
        self.table.get(&LexiconConfig::normalize_label(label)).copied()
    }

    /// Valence with the neutral fallback for unknown labels.
    pub fn valence(&self, label: &str) -> f64 {
        self.lookup(label).unwrap_or(NEUTRAL_VALENCE)
    }

    /// Semantic distance between two labels. Symmetric.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        (self.valence(a) - self.valence(b)).abs()
    }
}

impl Default for ValenceScale {
    fn default() -> Self {
        Self::new(&LexiconConfig::default())
    }
}
