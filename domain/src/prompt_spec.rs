use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn transcript_label(&self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "User",
            Role::Assistant => "Coach",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptBody {
    Text(String),
    Conversation { system: String, turns: Vec<Turn> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

pub const CHAT_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 120,
    temperature: 0.7,
};

pub const SENTIMENT_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 120,
    temperature: 0.7,
};

pub const RECOMMENDATION_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 180,
    temperature: 0.7,
};

/// Everything a backend needs for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub body: PromptBody,
    pub params: GenerationParams,
}

impl PromptSpec {
    pub fn text(prompt: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            body: PromptBody::Text(prompt.into()),
            params,
        }
    }

    pub fn conversation(system: impl Into<String>, turns: Vec<Turn>, params: GenerationParams) -> Self {
        Self {
            body: PromptBody::Conversation {
                system: system.into(),
                turns,
            },
            params,
        }
    }

    pub fn to_transcript(&self) -> String {
        match &self.body {
            PromptBody::Text(text) => text.clone(),
            PromptBody::Conversation { system, turns } => {
                let mut out = String::with_capacity(system.len() + 64);
                out.push_str(system);
                out.push('\n');
                for turn in turns {
                    out.push_str(turn.role.transcript_label());
                    out.push_str(": ");
                    out.push_str(&turn.content);
                    out.push('\n');
                }
                out.push_str(Role::Assistant.transcript_label());
                out.push(':');
                out
            }
        }
    }

    pub fn to_turns(&self) -> Vec<Turn> {
        match &self.body {
            PromptBody::Text(text) => vec![Turn::new(Role::User, text.clone())],
            PromptBody::Conversation { system, turns } => {
                let mut out = Vec::with_capacity(turns.len() + 1);
                out.push(Turn::new(Role::System, system.clone()));
                out.extend(turns.iter().cloned());
                out
            }
        }
    }
}

/// Terminal outcome of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Generated(String),
    Failed(String),
}

impl GenerationResult {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationResult::Generated(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::Generated(text) => Some(text),
            GenerationResult::Failed(_) => None,
        }
    }

    pub fn or_fallback(self, fallback: &str) -> String {
        match self {
            GenerationResult::Generated(text) => text,
            GenerationResult::Failed(_) => fallback.to_string(),
        }
    }
}

/// Failures come back as [`GenerationResult::Failed`], never as errors.
pub trait TextGenerator {
    fn generate(&self, spec: &PromptSpec) -> impl Future<Output = GenerationResult> + Send;
}
