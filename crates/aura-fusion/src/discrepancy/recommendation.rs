use aura_core::models::DiscrepancySeverity;

pub const CONSISTENT: &str = "Emotions are consistent across modalities.";
pub const MONITOR_CLOSELY: &str = "Moderate discrepancy detected. Monitor emotional state closely.";
pub const CONSULT_PROFESSIONAL: &str =
    "High emotional discrepancy detected. Consider professional consultation.";

/// Fixed recommendation for an overall severity.
pub fn recommendation_for(severity: DiscrepancySeverity) -> &'static str {
    match severity {
        DiscrepancySeverity::Low => CONSISTENT,
        DiscrepancySeverity::Medium => MONITOR_CLOSELY,
        DiscrepancySeverity::High => CONSULT_PROFESSIONAL,
    }
}
