use domain::prompt_spec::{GenerationResult, PromptSpec, TextGenerator};
use reqwest::Client;
use shared::types::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cohere_client::CohereClient;
use crate::config::{Config, Provider};
use crate::error::GenerationError;
use crate::ollama_client::OllamaClient;
use crate::openai_client::OpenAiClient;

#[derive(Clone)]
pub enum GenerationBackend {
    Cohere(CohereClient),
    OpenAi(OpenAiClient),
    Ollama(OllamaClient),
}

impl GenerationBackend {
    async fn generate(&self, spec: &PromptSpec) -> std::result::Result<String, GenerationError> {
        match self {
            GenerationBackend::Cohere(client) => client.generate(spec).await,
            GenerationBackend::OpenAi(client) => client.generate(spec).await,
            GenerationBackend::Ollama(client) => client.generate(spec).await,
        }
    }
}

/// One backend call per `generate`, no retries.
#[derive(Clone)]
pub struct GenerationClient {
    provider: Provider,
    backend: Option<GenerationBackend>,
}

impl GenerationClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Arc::new(Client::builder().timeout(config.request_timeout).build()?);
        let settings = config.backend(config.provider);

        let backend = match (config.provider, settings.api_key.as_deref()) {
            (Provider::Cohere, Some(key)) => Some(GenerationBackend::Cohere(CohereClient::new(
                http,
                key,
                &settings.model,
                &settings.base_url,
            ))),
            (Provider::OpenAi, Some(key)) => Some(GenerationBackend::OpenAi(OpenAiClient::new(
                http,
                key,
                &settings.model,
                &settings.base_url,
            ))),
            (Provider::Ollama, _) => Some(GenerationBackend::Ollama(OllamaClient::new(
                http,
                &settings.base_url,
                &settings.model,
            ))),
            (provider, None) => {
                warn!(%provider, "no API key configured; generation will use fallback text");
                None
            }
        };

        Ok(Self {
            provider: config.provider,
            backend,
        })
    }

    pub fn unconfigured(provider: Provider) -> Self {
        Self {
            provider,
            backend: None,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }
}

impl TextGenerator for GenerationClient {
    async fn generate(&self, spec: &PromptSpec) -> GenerationResult {
        let Some(backend) = &self.backend else {
            debug!(provider = %self.provider, "skipping generation: not configured");
            return GenerationResult::Failed(GenerationError::NotConfigured.to_string());
        };

        match backend.generate(spec).await {
            Ok(text) => GenerationResult::Generated(text),
            Err(err) => {
                warn!(provider = %self.provider, error = %err, "generation failed");
                GenerationResult::Failed(err.to_string())
            }
        }
    }
}
