//! # aura-session
//!
//! Per-user conversation history, bounded to the configured context window.
//!
//! - `context`: `ConversationSession`, one user's bounded message log
//! - `store`: `ConversationStore`, concurrent access keyed by `UserId`
//! - `transfer`: JSON export/import of a user's history

pub mod context;
pub mod store;
pub mod transfer;

pub use context::ConversationSession;
pub use store::ConversationStore;
