//! Console output formatter for assistant replies

use colored::Colorize;
use intel_application::AssistantStatus;
use intel_domain::{ChatRole, ChatTurn, DomainId};

/// Formats assistant output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the light `**bold**` markup the assistants emit.
    ///
    /// Unbalanced markers are left untouched.
    pub fn render_markup(text: &str) -> String {
        let segments: Vec<&str> = text.split("**").collect();
        if segments.len() % 2 == 0 {
            return text.to_string();
        }
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                if i % 2 == 1 {
                    segment.bold().to_string()
                } else {
                    (*segment).to_string()
                }
            })
            .collect()
    }

    /// A single reply under the assistant's name
    pub fn format_reply(assistant: &str, reply: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── {} ──", assistant).yellow().bold(),
            Self::render_markup(reply)
        )
    }

    /// An auto-analysis block
    pub fn format_analysis(assistant: &str, analysis: &str) -> String {
        let mut output = Self::section_header(&format!("{}: Auto-Analysis", assistant));
        output.push('\n');
        output.push_str(&Self::render_markup(analysis));
        output.push('\n');
        output
    }

    /// One-shot result as JSON
    pub fn format_json(domain: DomainId, prompt: &str, reply: &str) -> String {
        let value = serde_json::json!({
            "domain": domain.as_str(),
            "prompt": prompt,
            "reply": reply,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Readiness table for `--status`
    pub fn format_status(report: &[AssistantStatus]) -> String {
        let mut output = Self::section_header("Assistant Status");
        for status in report {
            let (tag, detail) = if status.configured {
                (
                    "READY".green().bold(),
                    format!("model {}", status.model.as_deref().unwrap_or("?")),
                )
            } else if status.credential_present {
                (
                    "ERROR".red().bold(),
                    "no model could be obtained".to_string(),
                )
            } else {
                (
                    "     ".normal(),
                    format!("{} is not set", status.credential_key),
                )
            };
            output.push_str(&format!(
                "  [{}] {:<26} {:<15} {}\n",
                tag,
                status.display_name,
                status.domain.as_str(),
                detail
            ));
        }
        output
    }

    pub fn format_status_json(report: &[AssistantStatus]) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "[]".to_string())
    }

    /// The chat transcript kept by the REPL
    pub fn format_history(history: &[ChatTurn]) -> String {
        if history.is_empty() {
            return format!("{}\n", "(no messages yet)".dimmed());
        }
        let mut output = String::new();
        for turn in history {
            let label = match turn.role {
                ChatRole::User => "You".cyan().bold(),
                ChatRole::Assistant => "AI".yellow().bold(),
            };
            output.push_str(&format!(
                "{} {}\n\n",
                label,
                Self::render_markup(&turn.content)
            ));
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!(
            "\n{}\n",
            format!("━━━ {} ━━━", title).cyan().bold()
        )
    }
}
