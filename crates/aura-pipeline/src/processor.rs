use std::sync::Arc;

use uuid::Uuid;

use aura_core::config::AuraConfig;
use aura_core::errors::AuraResult;
use aura_core::models::{Role, UserId};
use aura_core::traits::{ICrisisScreen, IResponseGenerator, ResponseRequest, RiskSignal};
use aura_fusion::{DiscrepancyAnalyzer, FusionEngine};
use aura_observability::{events, turn_span};
use aura_safety::{CrisisDetector, SAFETY_RESOURCE_MESSAGE};
use aura_session::ConversationStore;

use crate::metadata;
use crate::turn::{TurnInput, TurnOutcome};

/// Runs turns against a shared conversation store.
///
/// The screen, engines and store are all `Send + Sync`, so one processor
/// can serve many users concurrently.
pub struct TurnProcessor<G: IResponseGenerator> {
    screen: Box<dyn ICrisisScreen>,
    fusion: FusionEngine,
    discrepancy: DiscrepancyAnalyzer,
    store: Arc<ConversationStore>,
    generator: G,
}

impl<G: IResponseGenerator> TurnProcessor<G> {
    /// Build every component from one validated configuration.
    pub fn from_config(config: &AuraConfig, generator: G) -> AuraResult<Self> {
        config.validate()?;
        Ok(Self {
            screen: Box::new(CrisisDetector::from_config(&config.safety)?),
            fusion: FusionEngine::from_config(config)?,
            discrepancy: DiscrepancyAnalyzer::from_config(config)?,
            store: Arc::new(ConversationStore::from_config(config)?),
            generator,
        })
    }

    /// Default configuration throughout.
    pub fn with_defaults(generator: G) -> Self {
        Self {
            screen: Box::new(CrisisDetector::default()),
            fusion: FusionEngine::default(),
            discrepancy: DiscrepancyAnalyzer::default(),
            store: Arc::new(ConversationStore::default()),
            generator,
        }
    }

    /// Replace the crisis screen.
    pub fn with_screen(mut self, screen: impl ICrisisScreen + 'static) -> Self {
        self.screen = Box::new(screen);
        self
    }

    /// Share an existing store instead of the one built at construction.
    pub fn with_store(mut self, store: Arc<ConversationStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Process one user turn.
    ///
    /// The user message is always recorded before anything can fail. Only
    /// generator errors surface; a turn without readings proceeds without
    /// a wellness score.
    pub fn process_turn(&self, user_id: &UserId, input: TurnInput) -> AuraResult<TurnOutcome> {
        let turn_id = Uuid::new_v4();
        let _span = turn_span!(turn_id, user_id).entered();

        if let Some(phrase) = self.screen.matched_phrase(&input.text) {
            return Ok(self.crisis_turn(turn_id, user_id, &input.text, phrase));
        }

        let fusion = match self.fusion.fuse(&input.readings) {
            Ok(result) => Some(result),
            Err(e) => {
                events::fusion_skipped(user_id.as_str(), &e.to_string());
                None
            }
        };
        let discrepancy =
            (!input.readings.is_empty()).then(|| self.discrepancy.analyze(&input.readings));

        self.store.append(
            user_id,
            Role::User,
            input.text.clone(),
            metadata::assessed(turn_id, fusion.as_ref(), discrepancy.as_ref()),
        );

        let request = ResponseRequest {
            user_id: user_id.clone(),
            message: input.text,
            context: self.store.get_context(user_id, None),
            risk: fusion.as_ref().map(RiskSignal::from),
            discrepancy: discrepancy.clone(),
        };
        let reply = self.generator.generate(&request)?;

        self.store.append(
            user_id,
            Role::Assistant,
            reply.clone(),
            metadata::reply(turn_id),
        );

        Ok(TurnOutcome::Assessed {
            turn_id,
            reply,
            fusion,
            discrepancy,
        })
    }

    fn crisis_turn(
        &self,
        turn_id: Uuid,
        user_id: &UserId,
        text: &str,
        phrase: String,
    ) -> TurnOutcome {
        events::crisis_detected(user_id.as_str(), &phrase);
        self.store.append(
            user_id,
            Role::User,
            text,
            metadata::crisis(turn_id, Some(&phrase)),
        );
        self.store.append(
            user_id,
            Role::Assistant,
            SAFETY_RESOURCE_MESSAGE,
            metadata::crisis(turn_id, None),
        );
        TurnOutcome::Crisis {
            turn_id,
            matched_phrase: Some(phrase),
            safety_message: SAFETY_RESOURCE_MESSAGE.to_string(),
        }
    }
}
