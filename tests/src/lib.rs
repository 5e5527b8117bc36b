//! Test doubles shared by the integration tests.

use domain::prompt_spec::{GenerationResult, PromptSpec, TextGenerator};
use std::sync::Mutex;

type Responder = Box<dyn Fn(&PromptSpec) -> GenerationResult + Send + Sync>;

/// Deterministic generator that records every prompt it receives.
pub struct ScriptedGenerator {
    respond: Responder,
    calls: Mutex<Vec<PromptSpec>>,
}

impl ScriptedGenerator {
    pub fn with<F>(respond: F) -> Self
    where
        F: Fn(&PromptSpec) -> GenerationResult + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with(move |_| GenerationResult::Generated(text.clone()))
    }

    pub fn failing(reason: &str) -> Self {
        let reason = reason.to_string();
        Self::with(move |_| GenerationResult::Failed(reason.clone()))
    }

    pub fn calls(&self) -> Vec<PromptSpec> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, spec: &PromptSpec) -> GenerationResult {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(spec.clone());
        (self.respond)(spec)
    }
}
