use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{build_client, Provider};
use crate::errors::AssistantError;
use crate::wire::{GenerateContentRequest, GenerateContentResponse, GenerationRequest};

/// Google generative-language `generateContent` endpoint.
pub struct GeminiProvider {
    api_base: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(
        api_base: String,
        model: String,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, AssistantError> {
        Ok(Self {
            api_base,
            model,
            api_key,
            client: build_client(timeout)?,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, AssistantError> {
        let url = self.endpoint();
        let body = GenerateContentRequest::from(req);
        debug!(%url, temperature = req.params.temperature, max_output_tokens = req.params.max_output_tokens, "gemini: POST");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(%status, bytes = text.len(), "gemini: response");

        if !status.is_success() {
            return Err(AssistantError::Status { status: status.as_u16(), body: text });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| AssistantError::MalformedResponse(format!("{e}")))?;
        parsed
            .first_text()
            .ok_or_else(|| AssistantError::MalformedResponse("no candidate text in response".into()))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
