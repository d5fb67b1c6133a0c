//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "intel-platform";
const PROJECT_FILES: [&str; 2] = ["intel.toml", ".intel.toml"];
const ENV_PREFIX: &str = "INTEL_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `INTEL_*` environment variables (`INTEL_GATEWAY__TIMEOUT_SECS=60`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./intel.toml` or `./.intel.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/intel-platform/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Layered sources, lowest priority first
    pub fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being consulted
    pub fn sources_report(explicit: Option<&Path>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        let _ = writeln!(out, "  [ENV  ] {}* variables", ENV_PREFIX);

        if let Some(path) = explicit {
            let _ = writeln!(out, "  [{}] Explicit: {}", found(path), path.display());
        }

        match Self::project_config_path() {
            Some(path) => {
                let _ = writeln!(out, "  [FOUND] Project: {}", path.display());
            }
            None => {
                let _ = writeln!(out, "  [     ] Project: ./intel.toml or ./.intel.toml");
            }
        }

        if let Some(path) = Self::global_config_path() {
            let _ = writeln!(out, "  [{}] Global:  {}", found(&path), path.display());
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

fn found(path: &Path) -> &'static str {
    if path.exists() { "FOUND" } else { "     " }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intel_domain::DomainId;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gateway.timeout_secs, 30);
        assert!(config.statistics.database_url.is_none());
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("intel-platform"));
        }
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("intel.toml");
        std::fs::write(
            &global,
            "[gateway]\ntimeout_secs = 10\nmax_message_chars = 100\n",
        )
        .unwrap();
        std::fs::write(
            &project,
            "[gateway]\ntimeout_secs = 20\n\n[domains.data]\nextra_blocked_topics = [\"crypto\"]\n",
        )
        .unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(&global), Some(&project), None)
            .extract()
            .unwrap();
        assert_eq!(config.gateway.timeout_secs, 20);
        assert_eq!(config.gateway.max_message_chars, 100);
        assert_eq!(
            config.domains[&DomainId::DataScience].extra_blocked_topics,
            vec!["crypto"]
        );
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&missing)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config: FileConfig = ConfigLoader::figment(
            Some(&dir.path().join("nope.toml")),
            Some(&dir.path().join("intel.toml")),
            None,
        )
        .extract()
        .unwrap();
        assert_eq!(config.gateway.api_version, "v1beta");
    }
}
