//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use technique_content::{ConfigLoader, ContentFactory};
use technique_core::{BuilderConfig, Catalog};

/// Client configuration.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding RON catalog files; built-in data when unset.
    pub content_dir: Option<PathBuf>,
    /// TOML builder configuration; overrides `content_dir/config.toml`.
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Mirror logs to stderr in addition to the session log file.
    pub log_stderr: bool,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TECHNIQUE_CONTENT_DIR` - Catalog data directory
    /// - `TECHNIQUE_CONFIG` - Builder configuration TOML file
    /// - `TECHNIQUE_SESSION_ID` - Log session name (default: timestamp)
    /// - `TECHNIQUE_LOG_STDERR` - Also log to stderr (default: false)
    pub fn from_env() -> Self {
        Self {
            content_dir: read_env::<PathBuf>("TECHNIQUE_CONTENT_DIR"),
            config_path: read_env::<PathBuf>("TECHNIQUE_CONFIG"),
            session_id: read_env::<String>("TECHNIQUE_SESSION_ID"),
            log_stderr: read_env::<bool>("TECHNIQUE_LOG_STDERR").unwrap_or(false),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.content_dir {
            Some(dir) => {
                tracing::info!("Loading catalog from {}", dir.display());
                ContentFactory::new(dir).load_catalog()
            }
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn load_builder_config(&self) -> Result<BuilderConfig> {
        if let Some(path) = &self.config_path {
            return ConfigLoader::load(path);
        }
        match &self.content_dir {
            Some(dir) => ContentFactory::new(dir).load_config(),
            None => Ok(BuilderConfig::default()),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
