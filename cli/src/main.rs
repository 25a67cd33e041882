//! CLI entrypoint for reverie
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use reverie_application::{
    CardCatalogLoader, InteractionError, InterpretSpreadUseCase, PrepareDeckUseCase,
    SelectCardUseCase, StartReadingUseCase, TranscriptLogger,
};
use reverie_infrastructure::{
    ConfigLoader, CsvCardCatalogLoader, JsonlTranscriptLogger, OpenAiGateway, Severity, has_errors,
};
use reverie_presentation::{Cli, ReadingRepl, TerminalInteraction};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when -v is absent
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting reverie");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // CLI flags override file and environment settings
    if let Some(path) = cli.cards {
        config.cards.path = path;
    }
    if let Some(model) = cli.model {
        config.provider.model = model;
    }
    if let Some(path) = cli.transcript {
        config.logging.transcript = Some(path);
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("Config error: {}", issue.message),
            Severity::Warning => warn!("Config: {}", issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let catalog = CsvCardCatalogLoader::new(&config.cards.path)
        .load()
        .context("Failed to load the card meanings")?;
    let catalog = Arc::new(catalog);

    let gateway = Arc::new(OpenAiGateway::from_config(&config.provider));
    info!(
        "Using model {} at {}",
        config.provider.model,
        gateway.endpoint()
    );

    let transcript: Option<Arc<dyn TranscriptLogger>> = config
        .logging
        .transcript
        .as_ref()
        .and_then(JsonlTranscriptLogger::new)
        .map(|logger| {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn TranscriptLogger>
        });

    let terminal = TerminalInteraction::new()
        .context("Failed to open the terminal")?
        .with_history();

    // Name and question come first; cancelling either ends the program
    let mut start = StartReadingUseCase::new();
    if let Some(ref logger) = transcript {
        start = start.with_transcript_logger(logger.clone());
    }
    let mut session = match start.execute(&terminal) {
        Ok(Some(session)) => session,
        Ok(None) | Err(InteractionError::Closed) => {
            info!("Reading cancelled before it started");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read from the terminal"),
    };

    let mut prepare = match cli.seed {
        Some(seed) => PrepareDeckUseCase::with_seed(seed),
        None => PrepareDeckUseCase::new(),
    };
    let mut select = SelectCardUseCase::new();
    let mut interpret = InterpretSpreadUseCase::new(gateway, catalog.clone())
        .with_params(config.reading_params());
    if let Some(logger) = transcript {
        prepare = prepare.with_transcript_logger(logger.clone());
        select = select.with_transcript_logger(logger.clone());
        interpret = interpret.with_transcript_logger(logger);
    }

    let repl = ReadingRepl::new(prepare, select, interpret, catalog)
        .with_progress(config.output.show_progress);
    repl.run(&mut session, &terminal)
        .await
        .context("Failed to read from the terminal")?;

    Ok(())
}
