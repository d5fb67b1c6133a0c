//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::Spinner;
use colored::Colorize;
use intel_application::AssistantRegistry;
use intel_domain::{ChatTurn, DomainId};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Analyze,
    Clear,
    History,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; anything else is a chat message
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let name = line.strip_prefix('/')?;
        let name = name.split_whitespace().next().unwrap_or("");
        Some(match name.to_lowercase().as_str() {
            "analyze" | "analyse" => Self::Analyze,
            "clear" => Self::Clear,
            "history" => Self::History,
            "status" => Self::Status,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        })
    }
}

/// Interactive chat REPL bound to one domain
pub struct ChatRepl {
    registry: Arc<AssistantRegistry>,
    domain: DomainId,
    history: Vec<ChatTurn>,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(registry: Arc<AssistantRegistry>, domain: DomainId) -> Self {
        Self {
            registry,
            domain,
            history: Vec::new(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Turns exchanged so far
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create {}: {}", parent.display(), e);
        }
        match FileBackedHistory::with_file(self.config.history_size, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Line history disabled: {}", e);
                editor
            }
        }
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.domain.as_str().to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome().await;

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }
                    self.send(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Goodbye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Send one message and record both turns
    pub async fn send(&mut self, message: &str) -> String {
        let spinner = Spinner::start("Thinking...", self.config.show_progress);
        let reply = self.registry.chat(self.domain, message).await;
        spinner.finish();

        let assistant = self.registry.catalog().get(self.domain);
        println!(
            "{}",
            ConsoleFormatter::format_reply(&assistant.display_name, &reply)
        );
        self.history.push(ChatTurn::user(message));
        self.history.push(ChatTurn::assistant(reply.clone()));
        reply
    }

    /// Run the auto-analysis and append it to the transcript
    pub async fn analyze(&mut self) -> String {
        let spinner = Spinner::start("Analyzing data...", self.config.show_progress);
        let analysis = self.registry.analyze(self.domain).await;
        spinner.finish();

        let assistant = self.registry.catalog().get(self.domain);
        println!(
            "{}",
            ConsoleFormatter::format_analysis(&assistant.display_name, &analysis)
        );
        self.history.push(ChatTurn::assistant(format!(
            "**📊 Auto-Analysis Results:**\n\n{}",
            analysis
        )));
        analysis
    }

    async fn print_welcome(&self) {
        let assistant = self.registry.get(self.domain).await;
        let profile = assistant.profile();
        println!();
        println!(
            "{}",
            format!("━━━ {} ━━━", profile.display_name).cyan().bold()
        );
        if assistant.is_configured() {
            if let Some(model) = assistant.model() {
                println!("Model: {}", model.to_string().green());
            }
        } else {
            println!(
                "{}",
                format!("Not configured: set {}", profile.credential_key).yellow()
            );
        }
        println!("Type a question, or /help for commands.");
        println!();
    }

    /// Returns true when the REPL should exit
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Goodbye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                println!("Commands:");
                println!("  /analyze   - Run an auto-analysis of the current data");
                println!("  /clear     - Clear the conversation");
                println!("  /history   - Show the conversation so far");
                println!("  /status    - Show which assistants are configured");
                println!("  /help      - Show this help");
                println!("  /quit      - Exit chat");
                println!();
            }
            ReplCommand::Analyze => {
                self.analyze().await;
            }
            ReplCommand::Clear => {
                self.history.clear();
                println!("Conversation cleared.");
            }
            ReplCommand::History => {
                print!("{}", ConsoleFormatter::format_history(&self.history));
            }
            ReplCommand::Status => {
                let report = self.registry.status().await;
                print!("{}", ConsoleFormatter::format_status(&report));
            }
            ReplCommand::Unknown(line) => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands.");
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use intel_application::{GatewayError, ModelGateway, ModelHandle, StaticCredentials};
    use intel_domain::{
        ApiCredential, ChatRole, GENERATE_CONTENT, Model, ModelDescriptor, ModelReply,
        ProfileCatalog,
    };

    struct EchoGateway;

    struct EchoHandle(Model);

    #[async_trait]
    impl ModelGateway for EchoGateway {
        async fn list_models(
            &self,
            _credential: &ApiCredential,
        ) -> Result<Vec<ModelDescriptor>, GatewayError> {
            Ok(vec![ModelDescriptor::new(
                "models/gemini-1.5-flash",
                &[GENERATE_CONTENT],
            )])
        }

        async fn create_model(
            &self,
            _credential: &ApiCredential,
            model: &Model,
        ) -> Result<Box<dyn ModelHandle>, GatewayError> {
            Ok(Box::new(EchoHandle(model.clone())))
        }
    }

    #[async_trait]
    impl ModelHandle for EchoHandle {
        fn model(&self) -> &Model {
            &self.0
        }

        async fn generate(&self, _prompt: &str) -> Result<ModelReply, GatewayError> {
            Ok(ModelReply::from_text("Looks healthy."))
        }
    }

    fn repl() -> ChatRepl {
        let registry = AssistantRegistry::new(
            Arc::new(ProfileCatalog::builtin()),
            Arc::new(StaticCredentials::new().with("GEMINI_API_KEY_DATA", "secret")),
            Arc::new(EchoGateway),
        );
        ChatRepl::new(Arc::new(registry), DomainId::DataScience).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
            history_size: 10,
        })
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse(" /Analyze "), Some(ReplCommand::Analyze));
        assert_eq!(ReplCommand::parse("/history"), Some(ReplCommand::History));
        assert_eq!(
            ReplCommand::parse("/frobnicate now"),
            Some(ReplCommand::Unknown("/frobnicate now".to_string()))
        );
        assert_eq!(ReplCommand::parse("what is drift?"), None);
    }

    #[test]
    fn test_unwritable_history_dir_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut repl = repl();
        repl.config.history_file = Some(blocker.join("intel-platform").join("history.txt"));
        let _editor = repl.line_editor();
        assert!(blocker.is_file());
    }

    #[tokio::test]
    async fn test_send_records_both_turns() {
        let mut repl = repl();
        let reply = repl.send("Is the pipeline healthy?").await;
        assert_eq!(reply, "Looks healthy.");
        assert_eq!(repl.history().len(), 2);
        assert_eq!(repl.history()[0].role, ChatRole::User);
        assert_eq!(repl.history()[1].content, "Looks healthy.");
    }

    #[tokio::test]
    async fn test_analysis_is_appended_with_heading() {
        let mut repl = repl();
        repl.analyze().await;
        let turn = &repl.history()[0];
        assert_eq!(turn.role, ChatRole::Assistant);
        assert!(turn.content.starts_with("**📊 Auto-Analysis Results:**\n\n"));
    }

    #[tokio::test]
    async fn test_clear_and_quit() {
        let mut repl = repl();
        repl.send("hello").await;
        assert!(!repl.handle_command(ReplCommand::Clear).await);
        assert!(repl.history().is_empty());
        assert!(repl.handle_command(ReplCommand::Quit).await);
    }
}
