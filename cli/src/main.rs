//! CLI entrypoint for intel-platform
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use intel_application::{
    AssistantRegistry, ConversationLogger, NoConversationLogger, StatisticsProvider,
};
use intel_infrastructure::{
    ConfigLoader, EnvCredentialSource, FileConfig, GeminiGateway, JsonlConversationLogger,
    SqliteStatisticsProvider,
};
use intel_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ReplConfig, RunMode, Spinner};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Console logging by verbosity, plus a daily file when `log_dir` is set
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "intel-platform.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn build_registry(config: &FileConfig) -> Result<AssistantRegistry> {
    let credentials = Arc::new(EnvCredentialSource::with_dotenv());
    let gateway = Arc::new(GeminiGateway::with_endpoint(
        &config.gateway.base_url,
        &config.gateway.api_version,
    )?);

    let conversation_logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log
    {
        Some(path) => match JsonlConversationLogger::open(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let mut registry = AssistantRegistry::new(Arc::new(config.catalog()), credentials, gateway)
        .with_behavior(config.assistant_behavior())
        .with_conversation_logger(conversation_logger);

    if let Some(url) = &config.statistics.database_url {
        match SqliteStatisticsProvider::connect(url).await {
            Ok(provider) => {
                let provider: Arc<dyn StatisticsProvider> = Arc::new(provider);
                registry = registry.with_statistics(provider);
            }
            Err(e) => warn!("Statistics unavailable, answering without data: {}", e),
        }
    }

    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        let explicit = if cli.no_config { None } else { cli.config.as_deref() };
        println!("{}", ConfigLoader::sources_report(explicit));
        let config = load_config(&cli)?;
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref());
    let mode = cli.run_mode().map_err(|e| anyhow!(e))?;

    info!("Starting intel-platform");

    // === Dependency Injection ===
    let registry = Arc::new(build_registry(&config).await?);

    match mode {
        RunMode::Status => {
            let report = registry.status().await;
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_status(&report),
                OutputFormat::Json => ConsoleFormatter::format_status_json(&report),
            };
            println!("{}", output);
        }
        RunMode::Ask(domain, question) => {
            let spinner = Spinner::start("Thinking...", !cli.quiet);
            let reply = registry.chat(domain, &question).await;
            spinner.finish();

            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_reply(
                    &registry.catalog().get(domain).display_name,
                    &reply,
                ),
                OutputFormat::Json => ConsoleFormatter::format_json(domain, &question, &reply),
            };
            println!("{}", output);
        }
        RunMode::Analyze(domain) => {
            let spinner = Spinner::start("Analyzing data...", !cli.quiet);
            let analysis = registry.analyze(domain).await;
            spinner.finish();

            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_analysis(
                    &registry.catalog().get(domain).display_name,
                    &analysis,
                ),
                OutputFormat::Json => ConsoleFormatter::format_json(domain, "analyze", &analysis),
            };
            println!("{}", output);
        }
        RunMode::Chat(domain) => {
            let mut repl = ChatRepl::new(Arc::clone(&registry), domain)
                .with_config(ReplConfig::default().with_progress(!cli.quiet));
            repl.run().await?;
        }
    }

    Ok(())
}
