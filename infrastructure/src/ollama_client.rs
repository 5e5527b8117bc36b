use domain::prompt_spec::PromptSpec;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{non_empty, GenerationError};

const PROVIDER: &str = "ollama";

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct Options {
    num_predict: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
    options: Options,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Message,
    #[serde(default)]
    done: bool,
}

#[derive(Clone)]
pub struct OllamaClient {
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(client: Arc<Client>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub async fn generate(&self, spec: &PromptSpec) -> Result<String, GenerationError> {
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: &self.model,
            messages: spec
                .to_turns()
                .into_iter()
                .map(|turn| Message {
                    role: turn.role.as_str().to_string(),
                    content: turn.content,
                })
                .collect(),
            stream: false,
            options: Options {
                num_predict: spec.params.max_tokens,
                temperature: spec.params.temperature,
            },
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Status {
                provider: PROVIDER,
                status,
                body: text,
            });
        }
        non_empty(PROVIDER, &collect_content(&text))
    }
}

/// Joins message content from either a single JSON body or NDJSON chunks.
fn collect_content(body: &str) -> String {
    let mut full_content = String::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(chat_resp) = serde_json::from_str::<ChatResponse>(line) {
            full_content.push_str(&chat_resp.message.content);
            if chat_resp.done {
                break;
            }
        }
    }
    full_content
}
