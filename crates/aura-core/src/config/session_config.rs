use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MESSAGES_PER_TURN;
use crate::errors::ConfigError;

/// Conversation context store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Context window in turns, at most `MAX_WINDOW_SIZE`. Retained history
    /// is `2 × window_size` messages.
    pub window_size: usize,
}

impl SessionConfig {
    /// Hard cap on stored messages per user.
    pub fn max_messages(&self) -> usize {
        self.window_size.saturating_mul(MESSAGES_PER_TURN)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 || self.window_size > defaults::MAX_WINDOW_SIZE {
            return Err(ConfigError::InvalidWindow {
                window_size: self.window_size,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::DEFAULT_WINDOW_SIZE,
        }
    }
}
