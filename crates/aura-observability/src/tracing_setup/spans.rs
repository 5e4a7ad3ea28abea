//! Span definitions per operation: turn, fusion, discrepancy.

/// Create a span covering one user turn.
#[macro_export]
macro_rules! turn_span {
    ($turn_id:expr, $user_id:expr) => {
        $crate::tracing::info_span!("aura.turn", turn_id = %$turn_id, user_id = %$user_id)
    };
}

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($reading_count:expr) => {
        $crate::tracing::debug_span!("aura.fusion", reading_count = $reading_count)
    };
}

/// Create a discrepancy analysis span.
#[macro_export]
macro_rules! discrepancy_span {
    ($modality_count:expr) => {
        $crate::tracing::debug_span!("aura.discrepancy", modality_count = $modality_count)
    };
}
