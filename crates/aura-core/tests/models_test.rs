use aura_core::models::*;
use aura_core::traits::RiskSignal;
use std::collections::BTreeMap;

#[test]
fn modality_serializes_lowercase_and_orders_canonically() {
    assert_eq!(serde_json::to_string(&Modality::Voice).unwrap(), "\"voice\"");
    let parsed: Modality = serde_json::from_str("\"face\"").unwrap();
    assert_eq!(parsed, Modality::Face);
    assert!(Modality::Text < Modality::Voice && Modality::Voice < Modality::Face);
    assert_eq!(Modality::ALL.len(), 3);
}

#[test]
fn only_voice_uses_stress_score() {
    assert!(Modality::Voice.uses_stress_score());
    assert!(!Modality::Text.uses_stress_score());
    assert!(!Modality::Face.uses_stress_score());
}

#[test]
fn clamp_unit_bounds_and_nan() {
    assert_eq!(clamp_unit(1.7), 1.0);
    assert_eq!(clamp_unit(-0.2), 0.0);
    assert_eq!(clamp_unit(0.42), 0.42);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
}

#[test]
fn reading_keeps_raw_values() {
    let reading = ModalityReading::text("joy", 1.4, -0.1);
    assert_eq!(reading.modality, Modality::Text);
    assert_eq!(reading.score, 1.4);
    assert_eq!(reading.confidence, -0.1);
}

#[test]
fn severity_and_risk_are_ordered() {
    assert!(DiscrepancySeverity::Low < DiscrepancySeverity::Medium);
    assert!(DiscrepancySeverity::Medium < DiscrepancySeverity::High);
    assert!(RiskLevel::Low < RiskLevel::High);
    assert_eq!(RiskLevel::Medium.to_string(), "medium");
}

#[test]
fn user_id_serializes_as_plain_string() {
    let id = UserId::from(7u64);
    assert_eq!(id.as_str(), "7");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
}

#[test]
fn conversation_message_metadata_defaults_when_missing() {
    let json = r#"{"role":"user","content":"hi","timestamp":"2026-01-01T00:00:00Z"}"#;
    let msg: ConversationMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.role, Role::User);
    assert!(msg.metadata.is_empty());
    assert_eq!(
        msg.to_context_entry(),
        ContextEntry {
            role: Role::User,
            content: "hi".into()
        }
    );
}

#[test]
fn signal_adjustment_is_tagged() {
    let adj = SignalAdjustment::UnknownLabel {
        modality: Modality::Face,
        label: "contempt".into(),
        table: "positivity".into(),
    };
    let value = serde_json::to_value(&adj).unwrap();
    assert_eq!(value["kind"], "unknown_label");
    assert_eq!(value["modality"], "face");
    assert_eq!(adj.modality(), Modality::Face);
}

#[test]
fn risk_signal_copies_fusion_fields() {
    let result = FusionResult {
        overall_score: 0.45,
        risk_level: RiskLevel::Medium,
        per_modality_contribution: BTreeMap::new(),
        weights_used: BTreeMap::new(),
        overall_confidence: 0.8,
        analysis: String::new(),
        adjustments: Vec::new(),
    };
    let signal = RiskSignal::from(&result);
    assert_eq!(signal.risk_level, RiskLevel::Medium);
    assert_eq!(signal.overall_score, 0.45);
    assert_eq!(signal.overall_confidence, 0.8);
}
