use aura_core::config::RiskThresholds;
use aura_core::models::RiskLevel;

/// Map a wellness score to a risk tier.
///
/// Band upper bounds are inclusive: a score exactly at `high_max` is high
/// risk, exactly at `medium_max` is medium risk.
pub fn classify_risk(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score <= thresholds.high_max {
        RiskLevel::High
    } else if score <= thresholds.medium_max {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Plain-language reading of a wellness score.
pub fn analysis_for(score: f64) -> &'static str {
    if score >= 0.7 {
        "Mental state appears positive and stable. Multiple modalities indicate good well-being."
    } else if score >= 0.4 {
        "Mental state appears moderate. Some indicators of stress or negative emotion present."
    } else {
        "Mental state appears low. Significant stress or negative emotions detected across modalities."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_belong_to_the_riskier_tier() {
        let t = RiskThresholds::default();
        assert_eq!(classify_risk(0.3, &t), RiskLevel::High);
        assert_eq!(classify_risk(0.6, &t), RiskLevel::Medium);
    }

    #[test]
    fn interior_scores() {
        let t = RiskThresholds::default();
        assert_eq!(classify_risk(0.0, &t), RiskLevel::High);
        assert_eq!(classify_risk(0.300001, &t), RiskLevel::Medium);
        assert_eq!(classify_risk(0.600001, &t), RiskLevel::Low);
        assert_eq!(classify_risk(1.0, &t), RiskLevel::Low);
    }

    #[test]
    fn analysis_bands() {
        assert!(analysis_for(0.7).contains("positive"));
        assert!(analysis_for(0.4).contains("moderate"));
        assert!(analysis_for(0.39).contains("low"));
    }
}
