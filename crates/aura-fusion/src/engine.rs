use std::collections::BTreeMap;

use aura_core::config::{AuraConfig, FusionConfig, LexiconConfig};
use aura_core::errors::{AuraResult, FusionError};
use aura_core::models::{clamp_unit, FusionResult, Modality, ModalityReading};
use aura_observability::{events, fusion_span};

use crate::adjustments::AdjustmentTracker;
use crate::normalizer::SignalNormalizer;
use crate::readings::latest_per_modality;
use crate::risk::{analysis_for, classify_risk};
use crate::weights::renormalize;

/// Weighted multimodal fusion.
///
/// Stateless: repeated calls with the same readings yield identical
/// results, and one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct FusionEngine {
    config: FusionConfig,
    normalizer: SignalNormalizer,
}

impl FusionEngine {
    /// Build an engine after validating weights, thresholds and tables.
    pub fn new(config: FusionConfig, lexicon: &LexiconConfig) -> AuraResult<Self> {
        config.validate()?;
        lexicon.validate()?;
        Ok(Self {
            normalizer: SignalNormalizer::new(lexicon),
            config,
        })
    }

    pub fn from_config(config: &AuraConfig) -> AuraResult<Self> {
        Self::new(config.fusion.clone(), &config.lexicon)
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &SignalNormalizer {
        &self.normalizer
    }

    /// Fuse the supplied readings into one wellness assessment.
    ///
    /// Fails only with `InsufficientSignal` when `readings` is empty.
    pub fn fuse(&self, readings: &[ModalityReading]) -> AuraResult<FusionResult> {
        let _span = fusion_span!(readings.len()).entered();

        let latest = latest_per_modality(readings);
        if latest.is_empty() {
            return Err(FusionError::InsufficientSignal.into());
        }

        let weights_used = renormalize(&self.config.weights, latest.keys().copied());

        let mut tracker = AdjustmentTracker::new();
        let mut per_modality_contribution: BTreeMap<Modality, f64> = BTreeMap::new();
        let mut weighted_score = 0.0;
        let mut weighted_confidence = 0.0;

        for (modality, reading) in &latest {
            let signal = self.normalizer.normalize_reading(reading, &mut tracker);
            let weight = weights_used.get(modality).copied().unwrap_or(0.0);
            weighted_score += weight * signal.contribution;
            weighted_confidence += weight * signal.confidence;
            per_modality_contribution.insert(*modality, signal.contribution);
        }

        let overall_score = clamp_unit(weighted_score);
        let risk_level = classify_risk(overall_score, &self.config.risk);

        let modalities: Vec<&str> = latest.keys().map(|m| m.as_str()).collect();
        events::fusion_completed(&modalities, overall_score, risk_level.as_str());

        Ok(FusionResult {
            overall_score,
            risk_level,
            per_modality_contribution,
            weights_used,
            overall_confidence: clamp_unit(weighted_confidence),
            analysis: analysis_for(overall_score).to_string(),
            adjustments: tracker.into_adjustments(),
        })
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self {
            config: FusionConfig::default(),
            normalizer: SignalNormalizer::default(),
        }
    }
}
