//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_FILES: [&str; 2] = ["medicore.toml", ".medicore.toml"];

/// Prefix of environment overrides (`MEDICORE_GEMINI__MODEL` → `gemini.model`).
pub const ENV_PREFIX: &str = "MEDICORE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MEDICORE_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./medicore.toml` or `./.medicore.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/medicore/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(Self::global_config_path().as_deref(), config_path.map(|p| p.as_path()))
    }

    /// Same as [`load`](Self::load) with the global config location given.
    pub fn load_from(
        global_path: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        Self::figment(global_path, config_path)
            .extract()
            .map_err(Box::new)
    }

    fn figment(global_path: Option<&Path>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/medicore/config.toml if set,
    /// otherwise falls back to ~/.config/medicore/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("medicore").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* variables", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./medicore.toml or ./.medicore.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
