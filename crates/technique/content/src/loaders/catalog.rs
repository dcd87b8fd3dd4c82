//! Catalog loaders: tiers, effects, reductions and conditions.
//!
//! Each file wraps its entries in a single named list, e.g.
//!
//! ```text
//! (
//!     conditions: [
//!         (id: "agarrado", label: "Agarrado", cost: 1),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use technique_core::{
    ConditionDefinition, ConditionTable, EffectCatalog, EffectDefinition, ReductionCatalog,
    ReductionDefinition, TierProfile, TierTable,
};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TierTableRon {
    tiers: Vec<TierProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EffectCatalogRon {
    effects: Vec<EffectDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReductionCatalogRon {
    reductions: Vec<ReductionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConditionTableRon {
    conditions: Vec<ConditionDefinition>,
}

/// Loader for the tier table. Every tier 1..=7 must be present exactly once.
pub struct TierLoader;

impl TierLoader {
    pub fn load(path: &Path) -> LoadResult<TierTable> {
        let content = read_file(path)?;
        let data: TierTableRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tier table RON: {}", e))?;

        TierTable::from_profiles(data.tiers)
            .map_err(|e| anyhow::anyhow!("Invalid tier table {}: {}", path.display(), e))
    }
}

/// Loader for the effect catalog.
pub struct EffectLoader;

impl EffectLoader {
    pub fn load(path: &Path) -> LoadResult<EffectCatalog> {
        let content = read_file(path)?;
        let data: EffectCatalogRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        EffectCatalog::from_definitions(data.effects)
            .map_err(|e| anyhow::anyhow!("Invalid effect catalog {}: {}", path.display(), e))
    }
}

/// Loader for the reduction catalog.
pub struct ReductionLoader;

impl ReductionLoader {
    pub fn load(path: &Path) -> LoadResult<ReductionCatalog> {
        let content = read_file(path)?;
        let data: ReductionCatalogRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reduction catalog RON: {}", e))?;

        ReductionCatalog::from_definitions(data.reductions)
            .map_err(|e| anyhow::anyhow!("Invalid reduction catalog {}: {}", path.display(), e))
    }
}

/// Loader for the condition table.
pub struct ConditionLoader;

impl ConditionLoader {
    pub fn load(path: &Path) -> LoadResult<ConditionTable> {
        let content = read_file(path)?;
        let data: ConditionTableRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse condition table RON: {}", e))?;

        ConditionTable::from_definitions(data.conditions)
            .map_err(|e| anyhow::anyhow!("Invalid condition table {}: {}", path.display(), e))
    }
}
