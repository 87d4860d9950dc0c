//! CLI entrypoint for caseboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration and gateways from the
//! infrastructure layer, the session driver from the application layer,
//! formatting and progress from the presentation layer.

use anyhow::Result;
use caseboard_application::{
    BoardSessionOutput, NoProgress, NoTranscriptLogger, ParticipantGateway, RunBoardInput,
    RunBoardUseCase, SessionParams, TranscriptLogger,
};
use caseboard_domain::{Roster, SessionOutcome};
use caseboard_infrastructure::{CaseFile, ConfigLoader, JsonlTranscriptLogger, demo_session};
use caseboard_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
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

    // The non-blocking writer guard must outlive the session
    let mut _log_guard = None;
    if let Some(path) = &cli.log_file {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let file = path.file_name().unwrap_or("caseboard.log".as_ref());
        let appender = tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), file);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        _log_guard = Some(guard);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let case = match &cli.case {
        Some(path) => Some(CaseFile::load(path)?),
        None => None,
    };

    let mut params = config.session.to_params();
    if let Some(limit) = cli.turn_limit {
        params = params.with_turn_limit(limit);
    }

    info!("Starting caseboard");

    // === Dependency Injection ===
    let output = if cli.demo {
        let (roster, gateway, default_seed) = demo_session(case.as_ref());
        let seed = cli.seed.clone().unwrap_or(default_seed);
        run_session(
            gateway,
            roster,
            seed,
            params,
            &cli,
            config.logging.transcript_path.as_deref(),
        )
        .await?
    } else {
        let roster = config.board.to_roster()?;
        let seed = cli.seed.clone().unwrap_or_else(|| config.board.seed.clone());
        run_configured(&config, case, roster, seed, params, &cli).await?
    };

    let text = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&output),
        OutputFormat::Document => ConsoleFormatter::format_document(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };
    println!("{}", text);

    match output.outcome {
        SessionOutcome::Terminated => Ok(()),
        SessionOutcome::Cancelled => std::process::exit(130),
        _ => std::process::exit(1),
    }
}

/// Run one session with the given gateway, wiring cancellation (Ctrl-C),
/// progress display, and transcript logging.
async fn run_session<G: ParticipantGateway + 'static>(
    gateway: G,
    roster: Roster,
    seed: String,
    params: SessionParams,
    cli: &Cli,
    transcript_path: Option<&Path>,
) -> Result<BoardSessionOutput> {
    let token = CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    let use_case = RunBoardUseCase::new(Arc::new(gateway)).with_cancellation(token);
    let input = RunBoardInput::new(roster, seed).with_params(params);

    let logger: Box<dyn TranscriptLogger> = transcript_path
        .and_then(JsonlTranscriptLogger::create)
        .map(|l| Box::new(l) as Box<dyn TranscriptLogger>)
        .unwrap_or_else(|| Box::new(NoTranscriptLogger));

    let output = if cli.quiet {
        use_case
            .execute_with(input, &NoProgress, logger.as_ref())
            .await?
    } else {
        let progress = ProgressReporter::new();
        use_case
            .execute_with(input, &progress, logger.as_ref())
            .await?
    };
    Ok(output)
}

/// Run a configured (non-demo) board against the Ollama gateway.
#[cfg(feature = "ollama")]
async fn run_configured(
    config: &caseboard_infrastructure::FileConfig,
    case: Option<CaseFile>,
    roster: Roster,
    seed: String,
    params: SessionParams,
    cli: &Cli,
) -> Result<BoardSessionOutput> {
    let mut gateway = caseboard_infrastructure::OllamaParticipantGateway::new(
        config.ollama.base_url.clone(),
        config.ollama.model.clone(),
    );
    for p in &config.board.participants {
        if !p.brief.is_empty() {
            gateway = gateway.with_brief(p.name.as_str(), p.brief.as_str());
        }
    }
    if let Some(case) = case {
        gateway = gateway.with_case(case);
    }
    run_session(
        gateway,
        roster,
        seed,
        params,
        cli,
        config.logging.transcript_path.as_deref(),
    )
    .await
}

#[cfg(not(feature = "ollama"))]
async fn run_configured(
    _config: &caseboard_infrastructure::FileConfig,
    _case: Option<CaseFile>,
    _roster: Roster,
    _seed: String,
    _params: SessionParams,
    _cli: &Cli,
) -> Result<BoardSessionOutput> {
    anyhow::bail!(
        "configured boards need a language-model gateway; \
         rebuild with --features ollama, or run the scripted board with --demo"
    )
}
