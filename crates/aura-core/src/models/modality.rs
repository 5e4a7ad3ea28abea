use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the three independent emotion/stress input channels.
///
/// Ordering is canonical (text < voice < face) and drives map ordering
/// and pair ordering in results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Modality {
    Text,
    Voice,
    Face,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Text, Modality::Voice, Modality::Face];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Voice => "voice",
            Modality::Face => "face",
        }
    }

    /// Voice classifiers emit a stress score rather than a categorical
    /// emotion, so its wellness is derived from the score directly.
    pub fn uses_stress_score(&self) -> bool {
        matches!(self, Modality::Voice)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
