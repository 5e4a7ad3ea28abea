use std::collections::BTreeMap;

use aura_core::models::{Modality, ModalityReading};

/// One reading per modality, in canonical modality order.
///
/// When a modality appears more than once, the last reading supplied wins.
pub fn latest_per_modality(readings: &[ModalityReading]) -> BTreeMap<Modality, &ModalityReading> {
    let mut latest = BTreeMap::new();
    for reading in readings {
        if latest.insert(reading.modality, reading).is_some() {
            tracing::debug!(
                modality = %reading.modality,
                "duplicate modality reading; keeping the last one supplied"
            );
        }
    }
    latest
}
