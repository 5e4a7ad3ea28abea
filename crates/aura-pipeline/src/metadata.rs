//! Metadata keys recorded on stored messages.

use serde_json::Value;
use uuid::Uuid;

use aura_core::models::{DiscrepancyResult, FusionResult, MessageMetadata};

pub const TURN_ID: &str = "turn_id";
pub const CRISIS_DETECTED: &str = "crisis_detected";
pub const MATCHED_PHRASE: &str = "matched_phrase";
pub const OVERALL_SCORE: &str = "overall_score";
pub const RISK_LEVEL: &str = "risk_level";
pub const DISCREPANCY_DETECTED: &str = "discrepancy_detected";
pub const DISCREPANCY_SEVERITY: &str = "discrepancy_severity";

pub fn crisis(turn_id: Uuid, matched_phrase: Option<&str>) -> MessageMetadata {
    let mut meta = MessageMetadata::new();
    meta.insert(TURN_ID.into(), Value::from(turn_id.to_string()));
    meta.insert(CRISIS_DETECTED.into(), Value::Bool(true));
    if let Some(phrase) = matched_phrase {
        meta.insert(MATCHED_PHRASE.into(), Value::from(phrase));
    }
    meta
}

pub fn assessed(
    turn_id: Uuid,
    fusion: Option<&FusionResult>,
    discrepancy: Option<&DiscrepancyResult>,
) -> MessageMetadata {
    let mut meta = MessageMetadata::new();
    meta.insert(TURN_ID.into(), Value::from(turn_id.to_string()));
    meta.insert(CRISIS_DETECTED.into(), Value::Bool(false));
    if let Some(f) = fusion {
        meta.insert(OVERALL_SCORE.into(), Value::from(f.overall_score));
        meta.insert(RISK_LEVEL.into(), Value::from(f.risk_level.as_str()));
    }
    if let Some(d) = discrepancy {
        meta.insert(DISCREPANCY_DETECTED.into(), Value::Bool(d.detected));
        meta.insert(DISCREPANCY_SEVERITY.into(), Value::from(d.severity.as_str()));
    }
    meta
}

pub fn reply(turn_id: Uuid) -> MessageMetadata {
    let mut meta = MessageMetadata::new();
    meta.insert(TURN_ID.into(), Value::from(turn_id.to_string()));
    meta
}
