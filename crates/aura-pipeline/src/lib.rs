//! # aura-pipeline
//!
//! One conversational turn end to end. The crisis screen runs first and
//! short-circuits everything else; otherwise readings are fused, checked
//! for cross-modality disagreement, recorded with the message, and handed
//! to the reply generator with the recent context.

pub mod metadata;
pub mod processor;
pub mod turn;

pub use processor::TurnProcessor;
pub use turn::{TurnInput, TurnOutcome};
