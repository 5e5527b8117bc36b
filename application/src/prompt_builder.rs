use domain::models::{HabitLogRecord, Message, Sender, TaskRecord, WellnessRecord};
use domain::prompt_spec::{
    PromptSpec, Role, Turn, CHAT_PARAMS, RECOMMENDATION_PARAMS, SENTIMENT_PARAMS,
};
use serde_json::json;

pub const COACH_SYSTEM_PROMPT: &str = "You are FocusWell, a supportive, expert wellness and productivity coach. \
Keep answers concise, positive and actionable. Only answer questions about wellness, mental health, \
stress, mood, habits, productivity, or greetings. If a question is outside these topics, politely refuse.";

pub fn build_chat_prompt(history: &[Message], message: &str) -> PromptSpec {
    let mut turns: Vec<Turn> = history
        .iter()
        .map(|m| {
            let role = match m.sender {
                Sender::User => Role::User,
                Sender::Coach => Role::Assistant,
            };
            Turn::new(role, m.text.clone())
        })
        .collect();
    turns.push(Turn::new(Role::User, message));
    PromptSpec::conversation(COACH_SYSTEM_PROMPT, turns, CHAT_PARAMS)
}

/// Space-joins every non-empty `notes` field in input order.
pub fn aggregate_notes(records: &[WellnessRecord]) -> String {
    records
        .iter()
        .filter_map(|r| r.notes.as_deref())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build_sentiment_prompt(notes: &str) -> PromptSpec {
    let prompt = format!(
        "You are a wellness coach AI. Read the user's journal notes below and assess their mood, \
         stress and overall sentiment. Summarize their emotional state in 1-2 sentences, then \
         suggest one actionable tip for improvement.\n\nUser notes: {}\n",
        notes
    );
    PromptSpec::text(prompt, SENTIMENT_PARAMS)
}

pub fn build_recommendations_prompt(
    wellness_data: &[WellnessRecord],
    tasks: &[TaskRecord],
    habit_logs: &[HabitLogRecord],
) -> PromptSpec {
    let data = json!({
        "wellnessData": wellness_data,
        "tasks": tasks,
        "habitLogs": habit_logs,
    });
    let block = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
    let prompt = format!(
        "You are a wellness and productivity AI coach. Based on the user data below (habits, mood, \
         sleep, tasks and so on), give 2-3 personalized, evidence-based recommendations to improve \
         their well-being.\n\nUser data:\n{}\n",
        block
    );
    PromptSpec::text(prompt, RECOMMENDATION_PARAMS)
}
