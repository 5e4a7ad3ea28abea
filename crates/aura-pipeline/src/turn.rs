use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aura_core::models::{DiscrepancyResult, FusionResult, ModalityReading};

/// What the caller supplies for one turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnInput {
    /// The user's message.
    pub text: String,
    /// Classifier outputs captured alongside the message. May be empty.
    #[serde(default)]
    pub readings: Vec<ModalityReading>,
}

impl TurnInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            readings: Vec::new(),
        }
    }

    pub fn with_readings(mut self, readings: Vec<ModalityReading>) -> Self {
        self.readings = readings;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Self-harm language was found; the safety message was sent instead of
    /// any generated reply.
    Crisis {
        turn_id: Uuid,
        matched_phrase: Option<String>,
        safety_message: String,
    },
    /// Normal turn. `fusion` is `None` when no wellness score could be
    /// computed (no readings).
    Assessed {
        turn_id: Uuid,
        reply: String,
        fusion: Option<FusionResult>,
        discrepancy: Option<DiscrepancyResult>,
    },
}

impl TurnOutcome {
    pub fn turn_id(&self) -> Uuid {
        match self {
            TurnOutcome::Crisis { turn_id, .. } | TurnOutcome::Assessed { turn_id, .. } => {
                *turn_id
            }
        }
    }

    pub fn is_crisis(&self) -> bool {
        matches!(self, TurnOutcome::Crisis { .. })
    }

    /// The assistant message recorded for this turn.
    pub fn reply(&self) -> &str {
        match self {
            TurnOutcome::Crisis { safety_message, .. } => safety_message,
            TurnOutcome::Assessed { reply, .. } => reply,
        }
    }
}
