//! Configuration file loading for intel-platform
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTEL_*` environment variables, nested with `__`
//! 2. `--config <path>` specified file
//! 3. Project root: `./intel.toml` or `./.intel.toml`
//! 4. Global: `$XDG_CONFIG_HOME/intel-platform/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDomainConfig, FileGatewayConfig, FileLoggingConfig,
    FileStatisticsConfig,
};
pub use loader::ConfigLoader;
