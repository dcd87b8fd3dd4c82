//! Static option catalogs.
//!
//! The [`Catalog`] bundles every piece of reference data the engine consumes:
//! the tier table, effect and reduction definitions (each carrying its pricing
//! model), the condition table and the delivery type labels. Catalogs are
//! never part of the mutable builder state; a store receives one at
//! construction and only reads it.
//!
//! Built-in data is available through [`Catalog::builtin`]. Alternate data
//! sets can be assembled from loaded definitions (see `technique-content`).

mod conditions;
mod delivery;
mod effects;
mod reductions;

pub use conditions::{Condition, ConditionDefinition, ConditionTable};
pub use delivery::{DeliveryDefinition, DeliveryType};
pub use effects::{
    CONDITION_EFFECT_PREFIX, EffectCatalog, EffectDefinition, EffectId, ExclusiveGroup,
    SpecialEffect,
};
pub use reductions::{ReductionCatalog, ReductionDefinition, ReductionId};

use crate::tier::TierTable;

/// Inclusive magnitude range declared by a catalog entry.
///
/// Bounds are advisory: the engine prices out-of-range magnitudes as given.
/// Callers clamp before issuing updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnitudeBounds {
    pub min: i32,
    pub max: i32,
}

impl MagnitudeBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn up_to(max: i32) -> Self {
        Self::new(0, max)
    }

    pub const fn contains(&self, magnitude: i32) -> bool {
        magnitude >= self.min && magnitude <= self.max
    }

    pub fn clamp(&self, magnitude: i32) -> i32 {
        magnitude.clamp(self.min, self.max)
    }
}

/// Complete reference data set consumed by pricing and the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub tiers: TierTable,
    pub effects: EffectCatalog,
    pub reductions: ReductionCatalog,
    pub conditions: ConditionTable,
    pub delivery: Vec<DeliveryDefinition>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            tiers: TierTable::builtin(),
            effects: EffectCatalog::builtin(),
            reductions: ReductionCatalog::builtin(),
            conditions: ConditionTable::builtin(),
            delivery: DeliveryDefinition::builtin(),
        }
    }

    pub fn delivery(&self, id: DeliveryType) -> Option<&DeliveryDefinition> {
        self.delivery.iter().find(|definition| definition.id == id)
    }

    /// Display label for an effect identifier, falling back to the raw key.
    pub fn effect_label(&self, id: EffectId) -> String {
        match id {
            EffectId::Special(effect) => self
                .effects
                .get(effect)
                .map_or_else(|| effect.as_str().to_owned(), |def| def.label.clone()),
            EffectId::Condition(condition) => {
                let name = self
                    .conditions
                    .get(condition)
                    .map_or(condition.as_str(), |def| def.label.as_str());
                format!("Condição: {name}")
            }
        }
    }

    pub fn reduction_label(&self, id: ReductionId) -> String {
        self.reductions
            .get(id)
            .map_or_else(|| id.as_str().to_owned(), |def| def.label.clone())
    }

    pub fn effect_bounds(&self, id: EffectId) -> Option<MagnitudeBounds> {
        match id {
            EffectId::Special(effect) => self.effects.get(effect).and_then(|def| def.bounds),
            EffectId::Condition(_) => None,
        }
    }

    pub fn reduction_bounds(&self, id: ReductionId) -> Option<MagnitudeBounds> {
        self.reductions.get(id).and_then(|def| def.bounds)
    }

    /// Clamps a magnitude into the effect's declared bounds, if any.
    pub fn clamp_effect_magnitude(&self, id: EffectId, magnitude: i32) -> i32 {
        self.effect_bounds(id)
            .map_or(magnitude, |bounds| bounds.clamp(magnitude))
    }

    /// Clamps a magnitude into the reduction's declared bounds, if any.
    pub fn clamp_reduction_magnitude(&self, id: ReductionId, magnitude: i32) -> i32 {
        self.reduction_bounds(id)
            .map_or(magnitude, |bounds| bounds.clamp(magnitude))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
