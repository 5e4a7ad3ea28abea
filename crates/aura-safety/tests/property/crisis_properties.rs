use aura_safety::CrisisDetector;
use proptest::prelude::*;

// ── Detection ignores case and surrounding text ───────────────────────────

proptest! {
    #[test]
    fn any_casing_of_a_phrase_is_detected(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        upper_mask in proptest::collection::vec(any::<bool>(), 11)
    ) {
        let phrase: String = "kill myself"
            .chars()
            .zip(upper_mask)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let text = format!("{prefix}{phrase}{suffix}");
        let detector = CrisisDetector::new();
        prop_assert!(detector.detect(&text), "missed: {}", text);
    }

    #[test]
    fn detection_never_panics(text in ".{0,200}") {
        let detector = CrisisDetector::new();
        let _ = detector.detect(&text);
    }

    #[test]
    fn digits_only_text_is_never_crisis(text in "[0-9 ]{0,50}") {
        let detector = CrisisDetector::new();
        prop_assert!(!detector.detect(&text));
    }
}
