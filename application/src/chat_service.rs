use domain::models::{ChatRequest, ChatResponse};
use domain::prompt_spec::TextGenerator;
use std::sync::Arc;
use tracing::debug;

use crate::prompt_builder::build_chat_prompt;
use crate::response_composer::{compose_chat_reply, empty_message_reply, off_topic_reply};
use crate::topic_gate::TopicGate;

/// Conversational coaching: empty check, topic gate, one generation call.
pub struct ChatService<G> {
    generator: Arc<G>,
    gate: TopicGate,
}

impl<G> ChatService<G>
where
    G: TextGenerator + Send + Sync,
{
    pub fn new(generator: Arc<G>) -> Self {
        Self::with_gate(generator, TopicGate::new())
    }

    pub fn with_gate(generator: Arc<G>, gate: TopicGate) -> Self {
        Self { generator, gate }
    }

    pub async fn reply(&self, request: &ChatRequest) -> ChatResponse {
        if request.message.is_empty() {
            debug!("chat: empty message");
            return empty_message_reply();
        }
        if !self.gate.is_on_topic(&request.message) {
            debug!("chat: message rejected by topic gate");
            return off_topic_reply();
        }

        let spec = build_chat_prompt(&request.history, &request.message);
        let result = self.generator.generate(&spec).await;
        debug!(generated = result.is_generated(), "chat: generation finished");
        compose_chat_reply(result)
    }
}
