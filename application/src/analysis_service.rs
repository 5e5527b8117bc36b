use domain::insights::{InsightProvider, PlaceholderInsights};
use domain::models::{AnalyzeRequest, AnalyzeResponse};
use domain::prompt_spec::{GenerationResult, PromptSpec, TextGenerator};
use domain::wellness_score::compute_score;
use std::sync::Arc;
use tracing::debug;

use crate::prompt_builder::{aggregate_notes, build_recommendations_prompt, build_sentiment_prompt};
use crate::response_composer::compose_analysis;
use crate::topic_gate::TopicGate;

pub struct AnalysisService<G> {
    generator: Arc<G>,
    gate: TopicGate,
    gate_notes: bool,
    insights: Box<dyn InsightProvider + Send + Sync>,
}

impl<G> AnalysisService<G>
where
    G: TextGenerator + Send + Sync,
{
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            gate: TopicGate::new(),
            gate_notes: false,
            insights: Box::new(PlaceholderInsights),
        }
    }

    /// Runs journal notes through the topic gate before the sentiment call.
    pub fn with_notes_gate(mut self, gate: TopicGate) -> Self {
        self.gate = gate;
        self.gate_notes = true;
        self
    }

    pub fn with_insights(mut self, insights: impl InsightProvider + Send + Sync + 'static) -> Self {
        self.insights = Box::new(insights);
        self
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> AnalyzeResponse {
        let sentiment_spec = self.sentiment_spec(&aggregate_notes(&request.wellness_data));
        let recommendation_spec = build_recommendations_prompt(
            &request.wellness_data,
            &request.tasks,
            &request.habit_logs,
        );

        let sentiment = async {
            match &sentiment_spec {
                Some(spec) => self.generator.generate(spec).await,
                None => GenerationResult::Failed("no journal notes".to_string()),
            }
        };
        let (sentiment, recommendations) =
            tokio::join!(sentiment, self.generator.generate(&recommendation_spec));
        debug!(
            sentiment = sentiment.is_generated(),
            recommendations = recommendations.is_generated(),
            "analyze: generation finished"
        );

        compose_analysis(
            compute_score(&request.wellness_data),
            self.insights.insights(&request.wellness_data),
            sentiment,
            recommendations,
        )
    }

    fn sentiment_spec(&self, notes: &str) -> Option<PromptSpec> {
        if notes.trim().is_empty() {
            debug!("analyze: no journal notes, skipping sentiment call");
            return None;
        }
        if self.gate_notes && !self.gate.is_on_topic(notes) {
            debug!("analyze: journal notes rejected by topic gate");
            return None;
        }
        Some(build_sentiment_prompt(notes))
    }
}
