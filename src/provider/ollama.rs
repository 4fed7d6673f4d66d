use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{build_client, Provider};
use crate::errors::AssistantError;
use crate::wire::GenerationRequest;

/// Local Ollama server, `/api/chat` without streaming.
pub struct OllamaProvider {
    url: String,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: String,
}

impl OllamaProvider {
    pub fn new(url: String, model: String, timeout: Option<Duration>) -> Result<Self, AssistantError> {
        Ok(Self { url, model, client: build_client(timeout)? })
    }
}

fn chat_body<'a>(model: &'a str, req: &'a GenerationRequest) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![Msg { role: "user", content: &req.prompt }],
        stream: false,
        options: OllamaOptions {
            temperature: req.params.temperature,
            num_predict: req.params.max_output_tokens,
        },
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, AssistantError> {
        let url = format!("{}/api/chat", self.url.trim_end_matches('/'));
        debug!(%url, model = %self.model, "ollama: POST");

        let resp = self
            .client
            .post(&url)
            .json(&chat_body(&self.model, req))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(AssistantError::Status { status: status.as_u16(), body: text });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| AssistantError::MalformedResponse(format!("{e}")))?;
        if parsed.message.content.trim().is_empty() {
            return Err(AssistantError::MalformedResponse("empty message content".into()));
        }
        Ok(parsed.message.content)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
