use application::chat_service::ChatService;
use application::response_composer::{CHAT_FAILURE_REPLY, EMPTY_MESSAGE_REPLY, OFF_TOPIC_REPLY};
use domain::models::{ChatRequest, Message};
use domain::prompt_spec::CHAT_PARAMS;
use infrastructure::config::Provider;
use infrastructure::generation_client::GenerationClient;
use std::sync::Arc;
use tests::ScriptedGenerator;

fn request(message: &str, history: Vec<Message>) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        history,
    }
}

#[tokio::test]
async fn empty_message_skips_generation() {
    let generator = Arc::new(ScriptedGenerator::replying("unused"));
    let service = ChatService::new(Arc::clone(&generator));

    let response = service.reply(&request("", vec![])).await;
    assert_eq!(response.reply, EMPTY_MESSAGE_REPLY);
    assert_eq!(response.reply, "Please enter a message.");

    // whitespace is not empty; it fails the topic gate instead
    let response = service.reply(&request("   \n", vec![])).await;
    assert_eq!(response.reply, OFF_TOPIC_REPLY);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn off_topic_message_is_refused_without_generation() {
    let generator = Arc::new(ScriptedGenerator::replying("unused"));
    let service = ChatService::new(Arc::clone(&generator));

    let response = service
        .reply(&request("tell me a joke about cars", vec![]))
        .await;
    assert_eq!(response.reply, OFF_TOPIC_REPLY);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn on_topic_message_is_generated_and_formatted() {
    let generator = Arc::new(ScriptedGenerator::replying(
        "Try these:\n- box breathing\n- a short walk",
    ));
    let service = ChatService::new(Arc::clone(&generator));
    let history = vec![
        Message::user("hello"),
        Message::coach("Hi! How can I help?"),
    ];

    let response = service
        .reply(&request("I feel anxious today", history))
        .await;
    assert_eq!(
        response.reply,
        "Try these:\n\n\n\n- box breathing\n\n\n\n- a short walk"
    );

    let calls = generator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].params, CHAT_PARAMS);
    let transcript = calls[0].to_transcript();
    assert!(transcript.contains("User: hello\nCoach: Hi! How can I help?\nUser: I feel anxious today\nCoach:"));
}

#[tokio::test]
async fn backend_failure_becomes_apology() {
    let generator = Arc::new(ScriptedGenerator::failing("quota exceeded"));
    let service = ChatService::new(Arc::clone(&generator));

    let response = service.reply(&request("I am stressed", vec![])).await;
    assert_eq!(response.reply, CHAT_FAILURE_REPLY);
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn unconfigured_adapter_still_answers() {
    let service = ChatService::new(Arc::new(GenerationClient::unconfigured(Provider::Cohere)));

    let response = service.reply(&request("help me sleep better", vec![])).await;
    assert_eq!(response.reply, CHAT_FAILURE_REPLY);
}
