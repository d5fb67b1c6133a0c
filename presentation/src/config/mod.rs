//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to the line-editor history file; `None` keeps history in memory
    pub history_file: Option<PathBuf>,
    /// Number of history lines kept
    pub history_size: usize,
}

impl ReplConfig {
    /// Default history location under the user's data directory
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("intel-platform").join("history.txt"))
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: Self::default_history_file(),
            history_size: 500,
        }
    }
}
