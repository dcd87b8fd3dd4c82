//! Content factory for building a catalog from a data directory.

use std::path::{Path, PathBuf};

use technique_core::{BuilderConfig, Catalog};

use crate::loaders::{
    ConditionLoader, ConfigLoader, EffectLoader, LoadResult, ReductionLoader, TierLoader,
};

/// Content factory that loads catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tiers.ron
/// ├── effects.ron
/// ├── reductions.ron
/// └── conditions.ron
/// ```
///
/// Every file is optional; a missing file falls back to the built-in data.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load builder configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BuilderConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(BuilderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the complete catalog.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let builtin = Catalog::builtin();

        let tiers = match self.existing("tiers.ron") {
            Some(path) => TierLoader::load(&path)?,
            None => builtin.tiers,
        };
        let effects = match self.existing("effects.ron") {
            Some(path) => EffectLoader::load(&path)?,
            None => builtin.effects,
        };
        let reductions = match self.existing("reductions.ron") {
            Some(path) => ReductionLoader::load(&path)?,
            None => builtin.reductions,
        };
        let conditions = match self.existing("conditions.ron") {
            Some(path) => ConditionLoader::load(&path)?,
            None => builtin.conditions,
        };

        Ok(Catalog {
            tiers,
            effects,
            reductions,
            conditions,
            delivery: builtin.delivery,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use technique_core::Condition;

    use super::*;

    #[test]
    fn empty_directory_yields_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_catalog().unwrap(), Catalog::builtin());
        assert_eq!(factory.load_config().unwrap(), BuilderConfig::default());
    }

    #[test]
    fn present_files_override_builtin_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("conditions.ron"),
            r#"(conditions: [(id: "cego", label: "Cego", cost: 9)])"#,
        )
        .unwrap();

        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
        assert_eq!(catalog.conditions.len(), 1);
        assert_eq!(catalog.conditions.cost(Condition::Blinded), Some(9));
        assert_eq!(catalog.effects, Catalog::builtin().effects);
    }

    #[test]
    fn bundled_data_matches_builtin() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let factory = ContentFactory::new(data_dir);
        assert_eq!(factory.load_catalog().unwrap(), Catalog::builtin());
        assert_eq!(factory.load_config().unwrap(), BuilderConfig::default());
    }
}
