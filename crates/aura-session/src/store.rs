//! ConversationStore: concurrent per-user access via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use aura_core::config::{AuraConfig, SessionConfig};
use aura_core::errors::AuraResult;
use aura_core::models::{
    ContextEntry, ConversationMessage, ConversationSummary, MessageMetadata, Role, SessionState,
    UserId,
};
use aura_observability::events;

use crate::context::ConversationSession;

/// Thread-safe conversation store.
///
/// Writers for the same user are serialized by the map entry lock; readers
/// see either the state before or after a given append, never a partial one.
/// `Clone` shares the underlying map.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    sessions: Arc<DashMap<UserId, ConversationSession>>,
    config: SessionConfig,
}

impl ConversationStore {
    pub fn new(config: SessionConfig) -> AuraResult<Self> {
        config.validate()?;
        Ok(Self {
            sessions: Arc::new(DashMap::new()),
            config,
        })
    }

    pub fn from_config(config: &AuraConfig) -> AuraResult<Self> {
        Self::new(config.session.clone())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Messages retained per user.
    pub fn capacity(&self) -> usize {
        self.config.max_messages()
    }

    /// Append one message, creating the session on first use.
    pub fn append(
        &self,
        user_id: &UserId,
        role: Role,
        content: impl Into<String>,
        metadata: MessageMetadata,
    ) {
        let message = ConversationMessage::new(role, content, metadata);
        let capacity = self.capacity();
        let evicted = self
            .sessions
            .entry(user_id.clone())
            .or_insert_with(|| ConversationSession::new(capacity))
            .push(message);
        if evicted > 0 {
            tracing::debug!(user_id = %user_id, evicted, "context window full; evicted oldest");
        }
    }

    /// Most recent `limit` messages (default `window_size`), oldest first,
    /// stripped of metadata.
    pub fn get_context(&self, user_id: &UserId, limit: Option<usize>) -> Vec<ContextEntry> {
        let limit = limit.unwrap_or(self.config.window_size);
        self.sessions
            .get(user_id)
            .map(|s| s.context(limit))
            .unwrap_or_default()
    }

    /// Most recent `limit` full messages (default: everything retained).
    pub fn history(&self, user_id: &UserId, limit: Option<usize>) -> Vec<ConversationMessage> {
        let limit = limit.unwrap_or(usize::MAX);
        self.sessions
            .get(user_id)
            .map(|s| s.recent(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Empty a user's history. The user stays `Active`; unknown users are
    /// left `Absent`.
    pub fn clear(&self, user_id: &UserId) {
        if let Some(mut session) = self.sessions.get_mut(user_id) {
            let dropped = session.clear();
            events::conversation_cleared(user_id.as_str(), dropped);
        }
    }

    pub fn summary(&self, user_id: &UserId) -> ConversationSummary {
        self.sessions
            .get(user_id)
            .map(|s| s.summary())
            .unwrap_or_default()
    }

    pub fn state(&self, user_id: &UserId) -> SessionState {
        if self.sessions.contains_key(user_id) {
            SessionState::Active
        } else {
            SessionState::Absent
        }
    }

    /// Number of users with a session.
    pub fn user_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn user_ids(&self) -> Vec<UserId> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    pub(crate) fn snapshot(&self, user_id: &UserId) -> Vec<ConversationMessage> {
        self.history(user_id, None)
    }

    /// Swap in `messages` as the user's history; returns `(kept, trimmed)`.
    pub(crate) fn replace(
        &self,
        user_id: &UserId,
        messages: Vec<ConversationMessage>,
    ) -> (usize, usize) {
        let capacity = self.capacity();
        let mut session = self
            .sessions
            .entry(user_id.clone())
            .or_insert_with(|| ConversationSession::new(capacity));
        let trimmed = session.value_mut().replace(messages);
        (session.len(), trimmed)
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config: SessionConfig::default(),
        }
    }
}
