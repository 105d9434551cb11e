pub mod groq;
pub mod mock;
pub mod ollama;

pub use groq::GroqProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;

use std::collections::HashMap;
use std::sync::Arc;

use pantryforge_core::LlmProvider;

/// Registry of LLM providers, looked up by name.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn LlmProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider by name.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn LlmProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn LlmProvider>> {
        self.providers.get(name).cloned()
    }

    /// Get all registered provider names.
    pub fn list(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryforge_core::{ChatMessage, LlmRequest};

    fn request() -> LlmRequest {
        LlmRequest {
            model: "mock".into(),
            messages: vec![ChatMessage::user("hi")],
            max_tokens: 64,
            temperature: 0.1,
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = ProviderRegistry::new();
        registry.register("mock1", Arc::new(MockProvider::new("mock1")));
        registry.register("mock2", Arc::new(MockProvider::new("mock2")));

        assert!(registry.get("mock1").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.list().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_provider_fixed_response() {
        let provider = MockProvider::new("mock").with_response("canned");
        let response = provider.complete(&request()).await.unwrap();
        assert_eq!(response.content, "canned");
        assert_eq!(response.provider, "mock");
    }

    #[tokio::test]
    async fn test_mock_provider_scripted_sequence() {
        let provider = MockProvider::new("mock")
            .with_response("fallback")
            .with_responses(["first", "second"]);

        let first = provider.complete(&request()).await.unwrap();
        let second = provider.complete(&request()).await.unwrap();
        let third = provider.complete(&request()).await.unwrap();

        assert_eq!(first.content, "first");
        assert_eq!(second.content, "second");
        assert_eq!(third.content, "fallback");
        assert_eq!(provider.recorded_requests().len(), 3);
    }
}
