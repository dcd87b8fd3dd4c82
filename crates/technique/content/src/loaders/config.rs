//! Builder configuration loader.

use std::path::Path;

use technique_core::BuilderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for builder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their default values.
    pub fn load(path: &Path) -> LoadResult<BuilderConfig> {
        let content = read_file(path)?;
        let config: BuilderConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
