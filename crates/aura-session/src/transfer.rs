//! JSON export and import of a user's history.

use aura_core::errors::{AuraResult, SessionError};
use aura_core::models::{ConversationMessage, UserId};
use aura_observability::events;

use crate::store::ConversationStore;

impl ConversationStore {
    /// Full retained history as pretty-printed JSON. Unknown users export
    /// an empty array.
    pub fn export(&self, user_id: &UserId) -> AuraResult<String> {
        let messages = self.snapshot(user_id);
        let json =
            serde_json::to_string_pretty(&messages).map_err(|e| SessionError::Serialization {
                user_id: user_id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(json)
    }

    /// Replace the user's history with the messages in `json`, keeping the
    /// newest ones that fit the window. Returns the number kept.
    ///
    /// Malformed input leaves the existing history untouched.
    pub fn import(&self, user_id: &UserId, json: &str) -> AuraResult<usize> {
        let messages: Vec<ConversationMessage> =
            serde_json::from_str(json).map_err(|e| SessionError::Deserialization {
                user_id: user_id.to_string(),
                reason: e.to_string(),
            })?;
        let (kept, trimmed) = self.replace(user_id, messages);
        events::conversation_imported(user_id.as_str(), kept, trimmed);
        Ok(kept)
    }
}
