//! Spinner shown while an assistant waits on the model

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A single-line spinner; inert when progress display is off
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning with `message` if `enabled`
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_inert() {
        let spinner = Spinner::start("Thinking...", false);
        assert!(!spinner.is_active());
        spinner.finish();
    }
}
