//! # aura-core
//!
//! Foundation crate for the Aura wellness core.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AuraConfig;
pub use errors::{AuraError, AuraResult};
pub use models::{
    ConversationMessage, DiscrepancyResult, DiscrepancySeverity, FusionResult, Modality,
    ModalityReading, RiskLevel, Role, UserId,
};
