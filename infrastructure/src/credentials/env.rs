//! Environment-backed credential source.

use intel_application::ports::credentials::CredentialSource;
use intel_domain::{ApiCredential, CredentialKey};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads each domain's secret from the variable named by its key
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self
    }

    /// Load `.env` from the working directory and its parent, then read
    /// from the environment.
    pub fn with_dotenv() -> Self {
        match std::env::current_dir() {
            Ok(dir) => {
                Self::load_dotenv_files(&dir);
            }
            Err(e) => warn!("Could not resolve working directory for .env: {}", e),
        }
        Self
    }

    /// Load `dir/.env` then `dir/../.env`.
    ///
    /// Variables already present are never replaced, so the process
    /// environment wins over either file and `dir` wins over its parent.
    /// Returns the files that were read.
    pub fn load_dotenv_files(dir: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![dir.join(".env")];
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(".env"));
        }

        let mut loaded = Vec::new();
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            match dotenvy::from_path(&path) {
                Ok(()) => {
                    debug!("Loaded environment from {}", path.display());
                    loaded.push(path);
                }
                Err(e) => warn!("Could not read {}: {}", path.display(), e),
            }
        }
        loaded
    }
}

impl CredentialSource for EnvCredentialSource {
    fn lookup(&self, key: &CredentialKey) -> Option<ApiCredential> {
        if key.is_empty() {
            return None;
        }
        std::env::var(key.as_str()).ok().and_then(ApiCredential::new)
    }
}
