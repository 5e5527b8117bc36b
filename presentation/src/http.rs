use application::analysis_service::AnalysisService;
use application::chat_service::ChatService;
use application::topic_gate::TopicGate;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use domain::models::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse};
use domain::prompt_spec::TextGenerator;
use serde_json::{json, Value};
use shared::telemetry::Telemetry;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub struct AppState<G> {
    pub chat: Arc<ChatService<G>>,
    pub analysis: Arc<AnalysisService<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            chat: Arc::clone(&self.chat),
            analysis: Arc::clone(&self.analysis),
        }
    }
}

impl<G> AppState<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn new(generator: Arc<G>, gate_analyze: bool) -> Self {
        let mut analysis = AnalysisService::new(Arc::clone(&generator));
        if gate_analyze {
            analysis = analysis.with_notes_gate(TopicGate::new());
        }
        Self {
            chat: Arc::new(ChatService::new(generator)),
            analysis: Arc::new(analysis),
        }
    }
}

pub fn router<G>(state: AppState<G>) -> Router
where
    G: TextGenerator + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/chat", post(chat::<G>).get(chat_wrong_method))
        .route("/analyze", post(analyze::<G>))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn chat<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse>
where
    G: TextGenerator + Send + Sync + 'static,
{
    let telemetry = Telemetry::new();
    let response = state.chat.reply(&request).await;
    info!(elapsed_ms = telemetry.elapsed_ms(), "POST /chat");
    Json(response)
}

async fn analyze<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse>
where
    G: TextGenerator + Send + Sync + 'static,
{
    let telemetry = Telemetry::new();
    let response = state.analysis.analyze(&request).await;
    info!(
        elapsed_ms = telemetry.elapsed_ms(),
        records = request.wellness_data.len(),
        "POST /analyze"
    );
    Json(response)
}

async fn chat_wrong_method() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Use POST for chat endpoint")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
