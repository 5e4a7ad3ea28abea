//! Property tests for fusion and discrepancy invariants.

use aura_core::config::ModalityWeights;
use aura_core::models::{Modality, ModalityReading};
use aura_fusion::{renormalize, DiscrepancyAnalyzer, FusionEngine};
use proptest::prelude::*;

const LABELS: &[&str] = &[
    "joy", "happy", "surprise", "neutral", "sadness", "sad", "fear", "anger", "angry", "disgust",
    "bewildered", "",
];

fn modality() -> impl Strategy<Value = Modality> {
    prop_oneof![
        Just(Modality::Text),
        Just(Modality::Voice),
        Just(Modality::Face),
    ]
}

fn reading() -> impl Strategy<Value = ModalityReading> {
    (
        modality(),
        prop::sample::select(LABELS),
        -2.0f64..3.0,
        -2.0f64..3.0,
    )
        .prop_map(|(m, label, score, confidence)| ModalityReading::new(m, label, score, confidence))
}

fn readings() -> impl Strategy<Value = Vec<ModalityReading>> {
    prop::collection::vec(reading(), 1..6)
}

fn weights() -> impl Strategy<Value = ModalityWeights> {
    (0.0f64..5.0, 0.0f64..5.0, 0.0f64..5.0).prop_map(|(text, voice, face)| ModalityWeights {
        text,
        voice,
        face,
    })
}

proptest! {
    #[test]
    fn fused_values_stay_in_unit_range(readings in readings()) {
        let result = FusionEngine::default().fuse(&readings).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.overall_score));
        prop_assert!((0.0..=1.0).contains(&result.overall_confidence));
        for c in result.per_modality_contribution.values() {
            prop_assert!((0.0..=1.0).contains(c));
        }
    }

    #[test]
    fn weights_used_sum_to_one(readings in readings()) {
        let result = FusionEngine::default().fuse(&readings).unwrap();
        let sum: f64 = result.weights_used.values().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
    }

    #[test]
    fn renormalized_subset_sums_to_one(
        w in weights(),
        present in prop::collection::btree_set(modality(), 1..=3),
    ) {
        let out = renormalize(&w, present.iter().copied());
        prop_assert_eq!(out.len(), present.len());
        let sum: f64 = out.values().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(out.values().all(|v| *v >= 0.0));
    }

    #[test]
    fn fusion_is_deterministic(readings in readings()) {
        let engine = FusionEngine::default();
        prop_assert_eq!(engine.fuse(&readings).unwrap(), engine.fuse(&readings).unwrap());
    }

    #[test]
    fn distance_is_symmetric(
        a in prop::sample::select(LABELS),
        b in prop::sample::select(LABELS),
    ) {
        let analyzer = DiscrepancyAnalyzer::default();
        prop_assert_eq!(analyzer.distance(a, b), analyzer.distance(b, a));
        prop_assert_eq!(analyzer.distance(a, a), 0.0);
    }

    #[test]
    fn detection_matches_pairwise(readings in readings()) {
        let result = DiscrepancyAnalyzer::default().analyze(&readings);
        prop_assert_eq!(result.detected, !result.pairwise.is_empty());
        for pair in &result.pairwise {
            prop_assert!(pair.distance > 0.5);
            prop_assert!(pair.severity <= result.severity);
        }
    }
}
