//! CLI entrypoint for MediCore
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use medicore_application::{
    BehaviorConfig, ConversationLogger, ConversationOrchestrator, ModelConfig, SubmitOutcome,
};
use medicore_domain::Model;
use medicore_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, GeminiSettings, JsonlConversationLogger,
};
use medicore_presentation::{ChatRepl, Cli, ConsoleFormatter, SimpleStatus, StatusReporter};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps the chat output on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting MediCore");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // === Dependency Injection ===
    let Some(api_key) = config.gemini.resolve_api_key() else {
        bail!("No Gemini API key. Set [gemini] api_key, GEMINI_API_KEY or API_KEY.");
    };
    let settings = GeminiSettings::new(api_key)
        .with_base_url(config.gemini.base_url.clone())
        .with_timeout(config.timeout());
    let gateway = Arc::new(GeminiLlmGateway::new(settings)?);

    let models = model_config(&cli, &config);
    let behavior = behavior_config(&cli, &config);
    info!(
        routing = %models.routing,
        agents = %models.agents,
        handoff_ms = behavior.handoff_delay.as_millis() as u64,
        "Configured"
    );

    let mut orchestrator = ConversationOrchestrator::new(gateway, models, behavior);
    if let Some(logger) = transcript_logger(&cli, &config) {
        orchestrator = orchestrator.with_conversation_logger(logger);
    }
    let orchestrator = Arc::new(orchestrator);

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let outcome = if cli.quiet {
            orchestrator.submit(message).await
        } else if std::io::stderr().is_terminal() {
            orchestrator
                .submit_with_progress(message, &StatusReporter::new())
                .await
        } else {
            orchestrator
                .submit_with_progress(message, &SimpleStatus)
                .await
        };

        match outcome {
            SubmitOutcome::Completed(turn) => println!("{}", ConsoleFormatter::format_turn(&turn)),
            SubmitOutcome::Rejected(reason) => {
                bail!("{}", ConsoleFormatter::format_rejection(reason))
            }
        }
        return Ok(());
    }

    let repl = ChatRepl::new(orchestrator)
        .with_progress(!cli.quiet && config.repl.show_progress)
        .with_history_file(history_file(&config));
    repl.run().await?;

    Ok(())
}

/// Config-file models, overridden by `--model` and `--routing-model`.
fn model_config(cli: &Cli, config: &FileConfig) -> ModelConfig {
    let mut models = config.model_config();
    if let Some(name) = &cli.model {
        let Ok(model) = name.parse::<Model>();
        models = models.with_agents(model);
    }
    if let Some(name) = &cli.routing_model {
        let Ok(model) = name.parse::<Model>();
        models = models.with_routing(model);
    }
    models
}

fn behavior_config(cli: &Cli, config: &FileConfig) -> BehaviorConfig {
    let behavior = config.behavior_config();
    if cli.no_delay {
        behavior.with_handoff_delay_ms(0)
    } else {
        behavior
    }
}

/// `--transcript` wins over `[logging] transcript`.
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = cli
        .transcript
        .clone()
        .or_else(|| config.logging.transcript.clone())?;
    match JsonlConversationLogger::new(&path) {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Some(Arc::new(logger))
        }
        None => {
            warn!("Continuing without transcript");
            None
        }
    }
}

/// `[repl] history_file` with a leading `~` expanded, else the default.
fn history_file(config: &FileConfig) -> Option<PathBuf> {
    match config.repl.history_file.as_deref() {
        Some(path) => Some(expand_home(path)),
        None => ChatRepl::default_history_file(),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
