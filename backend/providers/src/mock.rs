use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use pantryforge_core::{LlmProvider, LlmRequest, LlmResponse};

/// A mock LLM provider that returns canned responses.
///
/// With `with_responses`, replies are consumed in order across calls; once
/// the script runs out (or none was given) the fixed response is returned.
/// Every request is recorded for inspection in tests.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    scripted: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            scripted: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut scripted = self.scripted.lock().unwrap();
            scripted.extend(responses.into_iter().map(Into::into));
        }
        self
    }

    /// Requests seen so far, in call order.
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let content = self
            .scripted
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fixed_response.clone())
            .unwrap_or_else(|| "Mock response".to_string());

        Ok(LlmResponse {
            content,
            provider: self.name.clone(),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
