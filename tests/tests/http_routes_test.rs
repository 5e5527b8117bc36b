use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use presentation::http::{router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tests::ScriptedGenerator;
use tower::ServiceExt;

fn app(generator: Arc<ScriptedGenerator>) -> Router {
    router(AppState::new(generator, false))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn chat_with_empty_message() {
    let generator = Arc::new(ScriptedGenerator::replying("unused"));
    let (status, body) = post_json(
        app(Arc::clone(&generator)),
        "/chat",
        json!({"message": "", "history": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"reply": "Please enter a message."}));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn chat_accepts_frontend_history() {
    let generator = Arc::new(ScriptedGenerator::replying("Drink some water."));
    let (status, body) = post_json(
        app(Arc::clone(&generator)),
        "/chat",
        json!({
            "message": "any hydration tips?",
            "history": [
                {"sender": "ai", "text": "Hi! I'm your coach."},
                {"sender": "user", "text": "hello"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Drink some water.");
    assert!(generator.calls()[0]
        .to_transcript()
        .contains("Coach: Hi! I'm your coach.\nUser: hello\n"));
}

#[tokio::test]
async fn analyze_returns_all_fields_when_generation_fails() {
    let generator = Arc::new(ScriptedGenerator::failing("offline"));
    let (status, body) = post_json(
        app(generator),
        "/analyze",
        json!({
            "wellnessData": [{"moodScore": 80, "notes": "calm"}, {"moodScore": 60}],
            "tasks": [],
            "habitLogs": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wellnessScore"], json!(70.0));
    assert_eq!(body["sentimentSummary"], "No journal analysis available.");
    assert_eq!(
        body["recommendations"],
        "- Maintain 7+ hours sleep.\n- Complete one small task daily.\n- Try a short walk for stress relief."
    );
    assert_eq!(body["insights"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn get_chat_explains_method() {
    let request = Request::builder()
        .method("GET")
        .uri("/chat")
        .body(Body::empty())
        .unwrap();
    let response = app(Arc::new(ScriptedGenerator::replying("unused")))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Use POST for chat endpoint");
}

#[tokio::test]
async fn health_probe() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app(Arc::new(ScriptedGenerator::replying("unused")))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
