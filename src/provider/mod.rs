use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::AssistantError;
use crate::wire::GenerationRequest;

pub mod gemini;
pub mod ollama;
#[cfg(test)]
pub mod fake;

/// The remote text generator. One call per request, awaited once, never retried.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, AssistantError>;

    fn name(&self) -> &'static str;
}

pub type DynProvider = Arc<dyn Provider>;

pub fn make_provider(cfg: &Config) -> Result<DynProvider, AssistantError> {
    let timeout = cfg.timeout_secs.map(Duration::from_secs);
    match cfg.provider {
        ProviderKind::Gemini => {
            let api_key = api_key_from_env(&cfg.api_key_env)?;
            Ok(Arc::new(gemini::GeminiProvider::new(
                cfg.api_base.clone(),
                cfg.model.clone(),
                api_key,
                timeout,
            )?))
        }
        ProviderKind::Ollama => Ok(Arc::new(ollama::OllamaProvider::new(
            cfg.ollama_url.clone(),
            cfg.model.clone(),
            timeout,
        )?)),
    }
}

fn api_key_from_env(var: &str) -> Result<String, AssistantError> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AssistantError::MissingApiKey { var: var.to_string() }),
    }
}

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, AssistantError> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    Ok(builder.build()?)
}
