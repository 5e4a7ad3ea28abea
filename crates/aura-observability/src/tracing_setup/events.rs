//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.
//! Message content is never logged.

/// Log a crisis override.
pub fn crisis_detected(user_id: &str, matched_phrase: &str) {
    tracing::warn!(
        event = "crisis_detected",
        user_id = %user_id,
        matched_phrase = %matched_phrase,
        "crisis language detected; safety response issued"
    );
}

/// Log a completed fusion.
pub fn fusion_completed(modalities: &[&str], overall_score: f64, risk_level: &str) {
    tracing::info!(
        event = "fusion_completed",
        modalities = ?modalities,
        overall_score = overall_score,
        risk_level = %risk_level,
        "fusion completed"
    );
}

/// Log a turn that proceeds without a wellness score.
pub fn fusion_skipped(user_id: &str, reason: &str) {
    tracing::warn!(
        event = "fusion_skipped",
        user_id = %user_id,
        reason = %reason,
        "wellness score unavailable for turn"
    );
}

/// Log a flagged modality pair.
pub fn discrepancy_flagged(pair: &str, distance: f64, severity: &str) {
    tracing::info!(
        event = "discrepancy_flagged",
        pair = %pair,
        distance = distance,
        severity = %severity,
        "modality discrepancy flagged"
    );
}

/// Log an out-of-range value that was clamped.
pub fn value_clamped(modality: &str, field: &str, original: f64, clamped: f64) {
    tracing::warn!(
        event = "value_clamped",
        modality = %modality,
        field = %field,
        original = original,
        clamped = clamped,
        "out-of-range reading value clamped"
    );
}

/// Log an unknown label falling back to neutral.
pub fn unknown_label(modality: &str, label: &str, table: &str) {
    tracing::warn!(
        event = "unknown_label",
        modality = %modality,
        label = %label,
        table = %table,
        "unknown emotion label; using neutral fallback"
    );
}

/// Log a cleared conversation.
pub fn conversation_cleared(user_id: &str, dropped: usize) {
    tracing::info!(
        event = "conversation_cleared",
        user_id = %user_id,
        dropped = dropped,
        "conversation cleared"
    );
}

/// Log an imported conversation.
pub fn conversation_imported(user_id: &str, imported: usize, trimmed: usize) {
    tracing::info!(
        event = "conversation_imported",
        user_id = %user_id,
        imported = imported,
        trimmed = trimmed,
        "conversation imported"
    );
}
