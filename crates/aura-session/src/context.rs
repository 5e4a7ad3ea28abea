//! ConversationSession: one user's bounded message log.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aura_core::models::{ContextEntry, ConversationMessage, ConversationSummary, Role};

/// Chronological message log holding at most `capacity` messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    messages: VecDeque<ConversationMessage>,
    capacity: usize,
    /// When this session was first created.
    pub created_at: DateTime<Utc>,
    /// Last append, clear or import.
    pub last_activity: DateTime<Utc>,
}

impl ConversationSession {
    pub fn new(capacity: usize) -> Self {
        let now = Utc::now();
        Self {
            messages: VecDeque::new(),
            capacity,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message, evicting from the front once over capacity.
    /// Returns the number of evicted messages.
    pub fn push(&mut self, message: ConversationMessage) -> usize {
        self.messages.push_back(message);
        self.last_activity = Utc::now();
        self.evict_overflow()
    }

    /// The most recent `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ConversationMessage> {
        let skip = self.messages.len().saturating_sub(limit);
        self.messages.iter().skip(skip)
    }

    pub fn context(&self, limit: usize) -> Vec<ContextEntry> {
        self.recent(limit)
            .map(ConversationMessage::to_context_entry)
            .collect()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ConversationMessage> {
        self.messages.iter()
    }

    /// Drop every message. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.messages.len();
        self.messages.clear();
        self.last_activity = Utc::now();
        dropped
    }

    /// Replace the log, keeping only the newest `capacity` messages.
    /// Returns how many supplied messages were trimmed.
    pub fn replace(&mut self, messages: Vec<ConversationMessage>) -> usize {
        self.messages = messages.into();
        self.last_activity = Utc::now();
        self.evict_overflow()
    }

    pub fn summary(&self) -> ConversationSummary {
        let user_message_count = self
            .messages
            .iter()
            .filter(|m| m.role == Role::User)
            .count();
        ConversationSummary {
            message_count: self.messages.len(),
            user_message_count,
            assistant_message_count: self.messages.len() - user_message_count,
            first_timestamp: self.messages.front().map(|m| m.timestamp),
            last_message: self.messages.back().cloned(),
        }
    }

    fn evict_overflow(&mut self) -> usize {
        let overflow = self.messages.len().saturating_sub(self.capacity);
        self.messages.drain(..overflow);
        overflow
    }
}
