use anyhow::Result;
use async_trait::async_trait;

use crate::types::ChatMessage;

/// Trait for LLM completion providers used by the agent.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "groq", "ollama").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    ///
    /// One blocking call, no retry; transport and auth failures propagate
    /// to the caller.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Request to an LLM provider: the full role-tagged message list for one
/// turn (system instructions, prior history, the new user message, and the
/// trailing pantry snapshot).
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}

/// Trait for best-effort image lookup.
///
/// Implementations must always return a usable URL: on zero results or any
/// failure they degrade to a fixed placeholder rather than erroring. Callers
/// may treat the result as always present.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn lookup(&self, dish_name: &str) -> String;
}
