use domain::prompt_spec::PromptSpec;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{non_empty, GenerationError};

const PROVIDER: &str = "cohere";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    #[serde(default)]
    text: String,
}

/// Text-completion client for Cohere's `generate` endpoint.
#[derive(Clone)]
pub struct CohereClient {
    client: Arc<Client>,
    api_key: String,
    model: String,
    base_url: String,
}

impl CohereClient {
    pub fn new(
        client: Arc<Client>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub async fn generate(&self, spec: &PromptSpec) -> Result<String, GenerationError> {
        let url = format!("{}/generate", self.base_url.trim_end_matches('/'));
        let request = GenerateRequest {
            model: &self.model,
            prompt: spec.to_transcript(),
            max_tokens: spec.params.max_tokens,
            temperature: spec.params.temperature,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                provider: PROVIDER,
                status,
                body,
            });
        }
        let parsed: GenerateResponse = response.json().await?;
        extract_text(parsed)
    }
}

pub(crate) fn extract_text(response: GenerateResponse) -> Result<String, GenerationError> {
    let first = response
        .generations
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse(PROVIDER))?;
    non_empty(PROVIDER, &first.text)
}
