//! CLI command definitions

use clap::{Parser, ValueEnum};
use intel_domain::DomainId;
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text for the terminal
    Text,
    /// `{domain, prompt, reply}` as JSON
    Json,
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Report every domain's readiness
    Status,
    /// One auto-analysis of a domain's data
    Analyze(DomainId),
    /// One question to a domain's assistant
    Ask(DomainId, String),
    /// Interactive chat with a domain's assistant
    Chat(DomainId),
}

/// CLI arguments for intel-platform
#[derive(Parser, Debug)]
#[command(name = "intel-platform")]
#[command(author, version, about = "Domain-restricted AI assistants for security, data and IT operations")]
#[command(long_about = r#"
Each domain (cybersecurity, datascience, it_operations) has its own assistant
with its own API key. Questions outside an assistant's domain are declined
without contacting the model.

API keys are read from the environment or a .env file:
  GEMINI_API_KEY_CYBER, GEMINI_API_KEY_DATA, GEMINI_API_KEY_IT

Configuration files are loaded from (in priority order):
1. INTEL_* environment variables
2. --config <path>     Explicit config file
3. ./intel.toml        Project-level config
4. ~/.config/intel-platform/config.toml   Global config

Example:
  intel-platform -d cyber "Which threat types dominate this month?"
  intel-platform -d data --analyze
  intel-platform -d it --chat
  intel-platform --status
"#)]
pub struct Cli {
    /// The question to ask (not required in chat, analyze or status mode)
    pub question: Option<String>,

    /// Domain to talk to: cybersecurity, datascience, it_operations (or cyber, data, it)
    #[arg(short, long, value_parser = parse_domain)]
    pub domain: Option<DomainId>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Run the auto-analysis of the domain's data
    #[arg(short, long)]
    pub analyze: bool,

    /// Show which assistants are configured and exit
    #[arg(long)]
    pub status: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_domain(value: &str) -> Result<DomainId, String> {
    value.parse().map_err(|e: intel_domain::DomainError| e.to_string())
}

impl Cli {
    /// Resolve the flags into a single mode
    pub fn run_mode(&self) -> Result<RunMode, String> {
        if self.status {
            return Ok(RunMode::Status);
        }

        let domain = self
            .domain
            .ok_or_else(|| "a domain is required (--domain cyber|data|it)".to_string())?;

        if self.chat && self.analyze {
            return Err("--chat and --analyze cannot be combined".to_string());
        }
        if (self.chat || self.analyze) && self.question.is_some() {
            return Err("a question cannot be combined with --chat or --analyze".to_string());
        }

        if self.chat {
            Ok(RunMode::Chat(domain))
        } else if self.analyze {
            Ok(RunMode::Analyze(domain))
        } else {
            match self.question.as_deref().map(str::trim) {
                Some(q) if !q.is_empty() => Ok(RunMode::Ask(domain, q.to_string())),
                _ => Ok(RunMode::Chat(domain)),
            }
        }
    }
}
