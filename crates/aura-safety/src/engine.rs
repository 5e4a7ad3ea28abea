use aura_core::config::SafetyConfig;
use aura_core::errors::AuraResult;
use aura_core::traits::ICrisisScreen;
use regex::Regex;

use crate::patterns::{self, self_harm::DEFAULT_PHRASES};

/// Binary self-harm language screen.
///
/// Implements `ICrisisScreen` from aura-core. Pure: no state changes on
/// `detect`, safe to share across threads.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    phrases: Vec<String>,
    /// `None` only if compilation failed; detection then falls back to
    /// a plain lowercase scan of `phrases`.
    matcher: Option<Regex>,
}

impl CrisisDetector {
    /// Detector over the built-in phrase list.
    pub fn new() -> Self {
        let phrases = patterns::prepare_phrases(DEFAULT_PHRASES);
        let matcher = match patterns::build_matcher(&phrases) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "crisis matcher unavailable; using linear scan");
                None
            }
        };
        Self { phrases, matcher }
    }

    /// Built-in phrases plus `extra_phrases` from config.
    pub fn from_config(config: &SafetyConfig) -> AuraResult<Self> {
        Self::with_phrases(
            DEFAULT_PHRASES
                .iter()
                .map(|p| p.to_string())
                .chain(config.extra_phrases.iter().cloned()),
        )
    }

    /// Detector over exactly the given phrases.
    pub fn with_phrases<I, S>(phrases: I) -> AuraResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = patterns::prepare_phrases(phrases);
        if phrases.is_empty() {
            return Ok(Self {
                phrases,
                matcher: None,
            });
        }
        let matcher = patterns::build_matcher(&phrases)?;
        Ok(Self {
            phrases,
            matcher: Some(matcher),
        })
    }

    /// Canonical phrases screened by this detector.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The first crisis phrase occurring in `text`, lowercased.
    pub fn matched_phrase(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.phrases.is_empty() {
            return None;
        }
        let canon = patterns::canonicalize(text);
        match &self.matcher {
            Some(re) => re.find(&canon).map(|m| m.as_str().to_lowercase()),
            None => {
                let lower = canon.to_lowercase();
                self.phrases
                    .iter()
                    .find(|p| lower.contains(p.as_str()))
                    .cloned()
            }
        }
    }

    /// Whether `text` contains any crisis phrase. Never fails; empty text is `false`.
    pub fn detect(&self, text: &str) -> bool {
        self.matched_phrase(text).is_some()
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ICrisisScreen for CrisisDetector {
    fn detect(&self, text: &str) -> bool {
        CrisisDetector::detect(self, text)
    }

    fn matched_phrase(&self, text: &str) -> Option<String> {
        CrisisDetector::matched_phrase(self, text)
    }
}
