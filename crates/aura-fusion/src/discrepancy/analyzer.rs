use aura_core::config::{AuraConfig, DiscrepancyConfig, LexiconConfig};
use aura_core::errors::AuraResult;
use aura_core::models::{
    DiscrepancyResult, DiscrepancySeverity, Modality, ModalityReading, PairwiseDiscrepancy,
};
use aura_observability::{discrepancy_span, events};

use super::recommendation::recommendation_for;
use super::valence::ValenceScale;
use crate::readings::latest_per_modality;

/// Pairwise label disagreement between modalities. Stateless.
#[derive(Debug, Clone)]
pub struct DiscrepancyAnalyzer {
    config: DiscrepancyConfig,
    scale: ValenceScale,
}

impl DiscrepancyAnalyzer {
    pub fn new(config: DiscrepancyConfig, lexicon: &LexiconConfig) -> AuraResult<Self> {
        config.validate()?;
        lexicon.validate()?;
        Ok(Self {
            scale: ValenceScale::new(lexicon),
            config,
        })
    }

    pub fn from_config(config: &AuraConfig) -> AuraResult<Self> {
        Self::new(config.discrepancy.clone(), &config.lexicon)
    }

    pub fn scale(&self) -> &ValenceScale {
        &self.scale
    }

    /// Distance between two labels on the valence axis.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.scale.distance(a, b)
    }

    /// Severity of a pair at `distance`, or `None` when not flagged.
    pub fn classify(&self, distance: f64) -> Option<DiscrepancySeverity> {
        if distance > self.config.high_distance {
            Some(DiscrepancySeverity::High)
        } else if distance > self.config.flag_distance {
            Some(DiscrepancySeverity::Medium)
        } else {
            None
        }
    }

    /// Compare every unordered pair of labelled modalities.
    ///
    /// Fewer than two labelled modalities is not an error: the result is
    /// simply "not detected".
    pub fn analyze(&self, readings: &[ModalityReading]) -> DiscrepancyResult {
        let labelled: Vec<(Modality, &ModalityReading)> = latest_per_modality(readings)
            .into_iter()
            .filter(|(_, r)| !r.label.trim().is_empty())
            .collect();
        let _span = discrepancy_span!(labelled.len()).entered();

        for (modality, reading) in &labelled {
            if self.scale.lookup(&reading.label).is_none() {
                events::unknown_label(modality.as_str(), &reading.label, "valence");
            }
        }

        let mut pairwise = Vec::new();
        for (i, (mod_a, reading_a)) in labelled.iter().enumerate() {
            for (mod_b, reading_b) in labelled.iter().skip(i + 1) {
                let distance = self.distance(&reading_a.label, &reading_b.label);
                if let Some(severity) = self.classify(distance) {
                    events::discrepancy_flagged(
                        &format!("{mod_a}/{mod_b}"),
                        distance,
                        severity.as_str(),
                    );
                    pairwise.push(PairwiseDiscrepancy {
                        pair: (*mod_a, *mod_b),
                        labels: (reading_a.label.clone(), reading_b.label.clone()),
                        distance,
                        severity,
                    });
                }
            }
        }

        let severity = pairwise
            .iter()
            .map(|p| p.severity)
            .max()
            .unwrap_or(DiscrepancySeverity::Low);

        DiscrepancyResult {
            detected: !pairwise.is_empty(),
            severity,
            pairwise,
            recommendation: recommendation_for(severity).to_string(),
        }
    }
}

impl Default for DiscrepancyAnalyzer {
    fn default() -> Self {
        Self {
            config: DiscrepancyConfig::default(),
            scale: ValenceScale::default(),
        }
    }
}
