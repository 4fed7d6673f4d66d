//! Canned-response provider for tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Provider;
use crate::errors::AssistantError;
use crate::wire::GenerationRequest;

/// Answers with the first registered response whose key occurs in the prompt,
/// and remembers every request it saw.
#[derive(Default)]
pub struct FakeProvider {
    responses: Vec<(String, String)>,
    fail_with_status: Option<u16>,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses.push((prompt_contains.to_string(), response.to_string()));
        self
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, AssistantError> {
        self.seen.lock().push(req.clone());

        if let Some(status) = self.fail_with_status {
            return Err(AssistantError::Status { status, body: "fake failure".into() });
        }
        self.responses
            .iter()
            .find(|(key, _)| req.prompt.contains(key.as_str()))
            .map(|(_, resp)| resp.clone())
            .ok_or_else(|| AssistantError::MalformedResponse(format!("no fake response for: {}", req.prompt)))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
