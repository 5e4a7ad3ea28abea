pub mod adjustment;
pub mod conversation;
pub mod discrepancy_result;
pub mod fusion_result;
pub mod modality;
pub mod reading;
pub mod user_id;

pub use adjustment::SignalAdjustment;
pub use conversation::{
    ContextEntry, ConversationMessage, ConversationSummary, MessageMetadata, Role, SessionState,
};
pub use discrepancy_result::{DiscrepancyResult, DiscrepancySeverity, PairwiseDiscrepancy};
pub use fusion_result::{FusionResult, RiskLevel};
pub use modality::Modality;
pub use reading::{clamp_unit, ModalityReading};
pub use user_id::UserId;
