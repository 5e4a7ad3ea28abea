use serde::{Deserialize, Serialize};

use crate::errors::AuraResult;
use crate::models::{ContextEntry, DiscrepancyResult, FusionResult, RiskLevel, UserId};

/// The subset of a fusion result a reply generator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSignal {
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub overall_confidence: f64,
}

impl From<&FusionResult> for RiskSignal {
    fn from(result: &FusionResult) -> Self {
        Self {
            overall_score: result.overall_score,
            risk_level: result.risk_level,
            overall_confidence: result.overall_confidence,
        }
    }
}

/// Everything handed to the reply generator for a non-crisis turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub user_id: UserId,
    pub message: String,
    /// Recent history in chronological order, ending with `message`.
    pub context: Vec<ContextEntry>,
    /// Absent when no wellness score could be computed for the turn.
    pub risk: Option<RiskSignal>,
    pub discrepancy: Option<DiscrepancyResult>,
}

/// Conversational reply generation (LLM, templates, …). Lives outside this core.
pub trait IResponseGenerator: Send + Sync {
    fn generate(&self, request: &ResponseRequest) -> AuraResult<String>;
}
