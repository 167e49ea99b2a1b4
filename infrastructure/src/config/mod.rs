//! Configuration file loading for medicore
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEDICORE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./medicore.toml` or `./.medicore.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/medicore/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV_VARS, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
