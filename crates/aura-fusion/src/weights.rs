//! Weight renormalization over the modalities actually present.

use std::collections::{BTreeMap, BTreeSet};

use aura_core::config::ModalityWeights;
use aura_core::models::Modality;

/// Restrict `weights` to `present` and rescale them to sum to 1.0.
///
/// Absent modalities get no entry. If every present modality has weight 0,
/// the present modalities share the weight uniformly. An empty `present`
/// yields an empty map.
pub fn renormalize<I>(weights: &ModalityWeights, present: I) -> BTreeMap<Modality, f64>
where
    I: IntoIterator<Item = Modality>,
{
    let present: BTreeSet<Modality> = present.into_iter().collect();
    if present.is_empty() {
        return BTreeMap::new();
    }

    let total: f64 = present.iter().map(|m| weights.get(*m)).sum();
    if total <= 0.0 || !total.is_finite() {
        let uniform = 1.0 / present.len() as f64;
        return present.into_iter().map(|m| (m, uniform)).collect();
    }

    present
        .into_iter()
        .map(|m| (m, weights.get(m) / total))
        .collect()
}
