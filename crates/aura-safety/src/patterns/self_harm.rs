//! Built-in self-harm and suicide indicators.
//!
//! Matching is substring-based, so short stems ("suicid", "cutting") cover
//! their inflections. The list errs toward false positives.

pub const DEFAULT_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "end my life",
    "no point",
    "don't see the point",
    "no reason to live",
    "harm myself",
    "hurt myself",
    "self-harm",
    "self harm",
    "cutting",
    "don't want to live",
    "want to die",
    "better off dead",
];
