use domain::models::{AnalyzeResponse, ChatResponse};
use domain::prompt_spec::GenerationResult;
use shared::utils::markdown_spacing;

pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a message.";
pub const OFF_TOPIC_REPLY: &str =
    "Sorry, I can only answer questions about wellness, mental health, stress relief, and related topics.";
pub const CHAT_FAILURE_REPLY: &str = "Sorry, I couldn't process your request.";
pub const SENTIMENT_FALLBACK: &str = "No journal analysis available.";
pub const RECOMMENDATIONS_FALLBACK: &str =
    "- Maintain 7+ hours sleep.\n- Complete one small task daily.\n- Try a short walk for stress relief.";

pub fn empty_message_reply() -> ChatResponse {
    ChatResponse {
        reply: EMPTY_MESSAGE_REPLY.to_string(),
    }
}

pub fn off_topic_reply() -> ChatResponse {
    ChatResponse {
        reply: OFF_TOPIC_REPLY.to_string(),
    }
}

pub fn compose_chat_reply(result: GenerationResult) -> ChatResponse {
    let reply = match result {
        GenerationResult::Generated(text) => markdown_spacing(&text),
        GenerationResult::Failed(_) => CHAT_FAILURE_REPLY.to_string(),
    };
    ChatResponse { reply }
}

pub fn compose_analysis(
    wellness_score: f64,
    insights: Vec<String>,
    sentiment: GenerationResult,
    recommendations: GenerationResult,
) -> AnalyzeResponse {
    AnalyzeResponse {
        wellness_score,
        insights,
        recommendations: recommendations.or_fallback(RECOMMENDATIONS_FALLBACK),
        sentiment_summary: sentiment.or_fallback(SENTIMENT_FALLBACK),
    }
}
