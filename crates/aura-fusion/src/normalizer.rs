//! Per-modality wellness contribution on a common [0, 1] scale.
//!
//! Text and face carry categorical emotion labels: contribution is
//! `positivity(label) × confidence`. Voice carries a stress score:
//! contribution is `1 − stress`, unscaled by confidence.

use std::collections::BTreeMap;

use aura_core::config::LexiconConfig;
use aura_core::constants::NEUTRAL_POSITIVITY;
use aura_core::models::{clamp_unit, Modality, ModalityReading};

use crate::adjustments::AdjustmentTracker;

/// A reading after clamping and label lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSignal {
    /// Wellness contribution in [0, 1]; higher is better.
    pub contribution: f64,
    /// Classifier confidence clamped into [0, 1].
    pub confidence: f64,
}

/// Label → positivity lookup plus the per-modality contribution rules.
#[derive(Debug, Clone)]
pub struct SignalNormalizer {
    positivity: BTreeMap<String, f64>,
}

impl SignalNormalizer {
    /// Normalizer over the lexicon's positivity table.
    pub fn new(lexicon: &LexiconConfig) -> Self {
        Self {
            positivity: lexicon.normalized().positivity,
        }
    }

    /// Positivity of a label, if the table knows it.
    pub fn positivity(&self, label: &str) -> Option<f64> {
        self.positivity
            .get(&LexiconConfig::normalize_label(label))
            .copied()
    }

    /// Wellness contribution for one `(label, score, confidence)` triple.
    ///
    /// Label-based modalities ignore `score`; voice ignores `label` and
    /// `confidence`. Out-of-range inputs are clamped.
    pub fn normalize(&self, modality: Modality, label: &str, score: f64, confidence: f64) -> f64 {
        let mut tracker = AdjustmentTracker::new();
        self.normalize_parts(modality, label, score, confidence, &mut tracker)
            .contribution
    }

    /// Normalize a reading, recording every adjustment in `tracker`.
    pub fn normalize_reading(
        &self,
        reading: &ModalityReading,
        tracker: &mut AdjustmentTracker,
    ) -> NormalizedSignal {
        self.normalize_parts(
            reading.modality,
            &reading.label,
            reading.score,
            reading.confidence,
            tracker,
        )
    }

    fn normalize_parts(
        &self,
        modality: Modality,
        label: &str,
        score: f64,
        confidence: f64,
        tracker: &mut AdjustmentTracker,
    ) -> NormalizedSignal {
        let confidence = clamp_tracked(modality, "confidence", confidence, tracker);

        let contribution = if modality.uses_stress_score() {
            let stress = clamp_tracked(modality, "score", score, tracker);
            1.0 - stress
        } else {
            let positivity = match self.positivity(label) {
                Some(p) => p,
                None => {
                    tracker.record_unknown_label(modality, label, "positivity");
                    NEUTRAL_POSITIVITY
                }
            };
            positivity * confidence
        };

        NormalizedSignal {
            contribution: clamp_unit(contribution),
            confidence,
        }
    }
}

impl Default for SignalNormalizer {
    fn default() -> Self {
        Self::new(&LexiconConfig::default())
    }
}

fn clamp_tracked(
    modality: Modality,
    field: &str,
    value: f64,
    tracker: &mut AdjustmentTracker,
) -> f64 {
    let clamped = clamp_unit(value);
    // NaN never compares equal, so it is recorded too.
    if clamped != value {
        tracker.record_clamp(modality, field, value, clamped);
    }
    clamped
}
