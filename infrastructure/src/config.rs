use anyhow::{anyhow, Context};
use dotenvy::dotenv;
use shared::types::Result;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_COHERE_MODEL: &str = "command-r-plus";
pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5:1.5b-instruct";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Cohere,
    OpenAi,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Cohere => "cohere",
            Provider::OpenAi => "openai",
            Provider::Ollama => "ollama",
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cohere" => Ok(Provider::Cohere),
            "openai" | "chatgpt" => Ok(Provider::OpenAi),
            "ollama" => Ok(Provider::Ollama),
            other => Err(anyhow!("unknown provider: {}", other)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for one backend.
#[derive(Clone)]
pub struct BackendSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub cohere: BackendSettings,
    pub openai: BackendSettings,
    pub ollama: BackendSettings,
    pub request_timeout: Duration,
    pub gate_analyze: bool,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the process environment, after merging a `.env` file if present.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let provider = match var("COACH_PROVIDER") {
            Some(name) => name.parse()?,
            None => Provider::Cohere,
        };

        let timeout_secs = match var("GENERATION_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid GENERATION_TIMEOUT_SECS: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let gate_analyze = match var("GATE_ANALYZE") {
            Some(raw) => parse_flag(&raw).with_context(|| format!("invalid GATE_ANALYZE: {}", raw))?,
            None => false,
        };

        Ok(Self {
            provider,
            cohere: BackendSettings {
                api_key: var("COHERE_API_KEY"),
                model: or("COHERE_MODEL", DEFAULT_COHERE_MODEL),
                base_url: or("COHERE_BASE_URL", DEFAULT_COHERE_BASE_URL),
            },
            openai: BackendSettings {
                api_key: var("OPENAI_API_KEY"),
                model: or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                base_url: or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            },
            ollama: BackendSettings {
                api_key: None,
                model: or("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
                base_url: or("OLLAMA_BASE_URL", DEFAULT_OLLAMA_BASE_URL),
            },
            request_timeout: Duration::from_secs(timeout_secs),
            gate_analyze,
            host: or("HOST", DEFAULT_HOST),
            port,
        })
    }

    pub fn backend(&self, provider: Provider) -> &BackendSettings {
        match provider {
            Provider::Cohere => &self.cohere,
            Provider::OpenAi => &self.openai,
            Provider::Ollama => &self.ollama,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("expected a boolean")),
    }
}
