//! # aura-safety
//!
//! Crisis override for the Aura core.
//! Case-insensitive substring screening for self-harm language, checked
//! before any scoring. A match is terminal for the turn: callers reply with
//! [`SAFETY_RESOURCE_MESSAGE`] and skip fusion entirely.

pub mod engine;
pub mod patterns;
pub mod resources;

pub use engine::CrisisDetector;
pub use resources::SAFETY_RESOURCE_MESSAGE;
