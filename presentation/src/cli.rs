use crate::http::{router, AppState};
use anyhow::Context;
use clap::{ArgAction, Parser};
use infrastructure::config::{Config, Provider};
use infrastructure::generation_client::GenerationClient;
use shared::telemetry::init_tracing;
use shared::types::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Wellness coaching service in front of a language model.
#[derive(Parser, Debug)]
#[command(name = "wellcoach")]
#[command(about = "Wellness coaching and journal analysis service", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Generation backend: cohere, openai or ollama (overrides COACH_PROVIDER)
    #[arg(long)]
    pub provider: Option<String>,

    /// Apply the topic gate to journal notes on /analyze
    #[arg(long, action = ArgAction::SetTrue)]
    pub gate_analyze: bool,

    /// Leave journal notes ungated even if GATE_ANALYZE is set
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "gate_analyze")]
    pub no_gate_analyze: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(name) = &self.provider {
            config.provider = name.parse::<Provider>()?;
        }
        if self.gate_analyze {
            config.gate_analyze = true;
        } else if self.no_gate_analyze {
            config.gate_analyze = false;
        }
        Ok(())
    }
}

pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        init_tracing(&cli.log_level)?;

        let mut config = Config::load()?;
        cli.apply_to(&mut config)?;

        let generator = GenerationClient::from_config(&config)?;
        info!(
            provider = %generator.provider(),
            configured = generator.is_configured(),
            gate_analyze = config.gate_analyze,
            "generation backend ready"
        );

        let app = router(AppState::new(Arc::new(generator), config.gate_analyze));
        let address = config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {}", address))?;
        info!("listening on {}", address);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
