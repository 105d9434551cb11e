//! Conversation orchestration: one chat turn from user message to reply.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use pantryforge_core::{
    AgentAction, ImageSearch, LlmProvider, LlmRequest, ModelConfig, NormalizedReply, PantryError,
    PantryState, RecipeCard,
};

use crate::normalizer::normalize;
use crate::session_store::SessionStore;
use crate::system_prompt::PromptBuilder;

/// Everything one turn produced: the normalized reply, resolved recipe
/// cards (empty unless the model proposed recipes), and the post-turn
/// pantry snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub reply: NormalizedReply,
    pub recipes: Vec<RecipeCard>,
    pub pantry: PantryState,
}

/// The conversation orchestrator. Owns the session store and delegates
/// intelligence to the LLM provider and decoration to the image search.
pub struct ChefAgent {
    provider: Arc<dyn LlmProvider>,
    image_search: Arc<dyn ImageSearch>,
    store: SessionStore,
    model_config: ModelConfig,
}

impl ChefAgent {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        image_search: Arc<dyn ImageSearch>,
        model_config: ModelConfig,
    ) -> Self {
        Self {
            provider,
            image_search,
            store: SessionStore::new(),
            model_config,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one chat turn for `user_id`.
    ///
    /// Provider transport/auth failures propagate; malformed provider
    /// output never does (the normalizer degrades it to a fallback reply).
    #[instrument(skip(self, message))]
    pub async fn handle_turn(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<TurnOutcome, PantryError> {
        let session = self.store.get_or_create(user_id).await;

        let request = LlmRequest {
            model: self.model_config.model_name.clone(),
            messages: PromptBuilder::build_turn(&session, message),
            max_tokens: self.model_config.max_tokens,
            temperature: self.model_config.temperature,
        };

        debug!(
            history_len = session.history.len(),
            pantry_len = session.pantry.ingredients.len(),
            "Calling LLM provider"
        );

        let response =
            self.provider
                .complete(&request)
                .await
                .map_err(|e| PantryError::LlmError {
                    provider: self.provider.name().to_string(),
                    message: e.to_string(),
                })?;

        info!(
            provider = %response.provider,
            tokens = response.tokens_used,
            latency_ms = response.latency_ms,
            "Provider responded"
        );

        let reply = normalize(&response.content);
        let pantry = self.store.apply_turn(user_id, &reply, message).await;

        let mut recipes = Vec::new();
        if reply.action == AgentAction::GenerateRecipes {
            for name in &reply.recipe_names {
                let image_url = self.image_search.lookup(name).await;
                recipes.push(RecipeCard {
                    name: name.clone(),
                    image_url,
                });
            }
            info!(recipe_count = recipes.len(), "Resolved recipe images");
        }

        Ok(TurnOutcome {
            reply,
            recipes,
            pantry,
        })
    }
}
