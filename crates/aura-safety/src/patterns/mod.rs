pub mod self_harm;

use aura_core::errors::ConfigError;
use regex::{Regex, RegexBuilder};

/// Fold typographic apostrophes so "don’t" and "don't" screen the same.
pub fn canonicalize(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}', '\u{02BC}'], "'")
}

/// Canonical, de-duplicated, non-empty phrase list.
///
/// Empty phrases are dropped: an empty alternative would match every input.
pub fn prepare_phrases<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for phrase in phrases {
        let canon = canonicalize(phrase.as_ref().trim()).to_lowercase();
        if !canon.is_empty() && !out.contains(&canon) {
            out.push(canon);
        }
    }
    out
}

/// Compile phrases into one case-insensitive alternation of escaped literals.
pub fn build_matcher(phrases: &[String]) -> Result<Regex, ConfigError> {
    let pattern = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            reason: e.to_string(),
        })
}
