/// Conversation store errors. Only export/import can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("failed to serialize conversation for {user_id}: {reason}")]
    Serialization { user_id: String, reason: String },

    #[error("failed to deserialize conversation for {user_id}: {reason}")]
    Deserialization { user_id: String, reason: String },
}
