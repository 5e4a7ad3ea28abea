/// Self-harm language screening. Must never fail: empty or malformed
/// input yields `false`.
pub trait ICrisisScreen: Send + Sync {
    /// Whether the text contains any crisis indicator.
    fn detect(&self, text: &str) -> bool;

    /// The first indicator found, for audit metadata.
    fn matched_phrase(&self, text: &str) -> Option<String>;
}
