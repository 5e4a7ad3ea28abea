//! Cross-modality disagreement.
//!
//! Each labelled modality is placed on a shared valence axis; pairs whose
//! distance exceeds the configured threshold are flagged.

pub mod analyzer;
pub mod recommendation;
pub mod valence;

pub use analyzer::DiscrepancyAnalyzer;
pub use valence::ValenceScale;
