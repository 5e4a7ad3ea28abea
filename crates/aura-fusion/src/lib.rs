//! # aura-fusion
//!
//! Pure, stateless scoring for the Aura core.
//!
//! ## Modules
//!
//! - `normalizer`: per-modality wellness contribution in [0, 1]
//! - `weights`: explicit renormalization over present modalities
//! - `risk`: score → risk tier and analysis text
//! - `engine`: `FusionEngine`, the weighted combination
//! - `discrepancy`: pairwise valence distance between modality labels
//! - `adjustments`: audit trail of clamped values and label fallbacks

pub mod adjustments;
pub mod discrepancy;
pub mod engine;
pub mod normalizer;
pub mod readings;
pub mod risk;
pub mod weights;

pub use adjustments::AdjustmentTracker;
pub use discrepancy::{DiscrepancyAnalyzer, ValenceScale};
pub use engine::FusionEngine;
pub use normalizer::{NormalizedSignal, SignalNormalizer};
pub use risk::classify_risk;
pub use weights::renormalize;
