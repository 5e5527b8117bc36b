pub const DEFAULT_VOCABULARY: &[&str] = &[
    "wellness", "wellbeing", "mental health", "mental wellbeing", "stress", "stressed",
    "depression", "depressed", "anxiety", "anxious", "mood", "happiness", "happy", "sadness",
    "sad", "motivation", "motivated", "self-care", "self care", "relaxation", "relax",
    "mindfulness", "burnout", "resilience", "therapy", "therapist", "counseling", "counselor",
    "support", "gratitude", "journaling", "journal", "meditation", "meditate", "exercise",
    "exercising", "fitness", "nutrition", "diet", "hydration", "rest", "recovery", "energy",
    "positivity", "positive", "emotional health", "psychological health", "behavioral health",
    "coping skills", "cope", "coping", "self-improvement", "improvement", "personal growth",
    "growth", "life balance", "work-life balance", "work life balance", "social connection",
    "relationships", "relationship", "support system", "productivity", "productive", "habit",
    "habits", "sleep", "sleep quality", "sleep hours", "physical activity", "activity",
    "screen time", "digital wellness", "water intake", "meals skipped", "meditation minutes",
    "energy level", "notes", "risk assessment", "recommendation", "insight", "streak",
    "tracking", "analytics", "score", "wellness score", "mood score", "stress level",
    "productivity score", "physical activity minutes", "social interaction",
    "social interaction hours", "screen time hours", "water intake glasses", "meals",
    "created at", "updated at", "coach", "health", "personal development", "focus",
    "concentration", "balance", "life", "work", "goal", "goal setting", "achievement",
    "success", "failure", "challenge", "overcome", "support group", "peer support",
    "psychologist", "psychiatrist", "mental disorder", "diagnosis", "treatment", "prevention",
    "intervention", "resource", "tip", "advice", "guidance", "routine", "ritual",
    "habit formation", "behavior change", "positive psychology", "emotional intelligence",
    "self-awareness", "self-regulation", "mindset", "attitude", "optimism", "pessimism",
    "gratitude journal", "affirmation", "reflection", "check-in", "survey", "assessment",
    "screening", "symptom", "sign", "indicator", "trend", "pattern", "history", "log", "record",
    "entry", "update", "reminder", "notification", "alert", "encouragement", "reward",
    "celebration", "milestone", "progress", "decline", "setback", "relapse", "recovery plan",
    "treatment plan", "care plan", "action plan", "goal plan", "wellness plan",
    "mental health plan", "crisis", "emergency", "urgent", "important", "priority",
    "high priority", "low priority", "urgent priority", "easy", "medium", "hard", "difficulty",
    "challenge level", "task", "task management", "task tracking", "habit tracking",
    "habit log", "habit streak", "habit consistency", "habit analytics", "habit insight",
    "habit recommendation", "habit improvement", "habit decline", "habit setback",
    "habit recovery", "habit plan", "habit goal", "habit action", "habit support",
    "habit encouragement", "habit reward", "habit celebration", "habit milestone",
    "habit progress", "hi", "hello",
];

#[derive(Debug, Clone)]
pub struct TopicPolicy {
    pub terms: Vec<String>,
}

impl TopicPolicy {
    pub fn new() -> Self {
        Self::with_terms(DEFAULT_VOCABULARY.iter().copied())
    }

    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_on_topic(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }
}

impl Default for TopicPolicy {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_on_topic(message: &str) -> bool {
    let lowered = message.to_lowercase();
    DEFAULT_VOCABULARY.iter().any(|term| lowered.contains(term))
}
