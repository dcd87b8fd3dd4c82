//! Point-accounting engine for the technique builder.
//!
//! `technique-core` defines the canonical pricing rules (tiers, option
//! catalogs, effect and reduction pricing) and the selection store that keeps
//! the spent/available balance consistent. All mutation flows through
//! [`store::TechniqueStore`]; every action re-prices the full selection before
//! returning, so readers only ever observe a consistent balance.
//!
//! The crate is pure: no I/O, no logging, no global state. Catalogs are
//! injected into the store at construction.
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod pricing;
pub mod selection;
pub mod store;
pub mod summary;
pub mod tier;

#[cfg(feature = "serde")]
mod serde_ids;

pub use catalog::{
    Catalog, Condition, ConditionDefinition, ConditionTable, DeliveryDefinition, DeliveryType,
    EffectCatalog, EffectDefinition, EffectId, ExclusiveGroup, MagnitudeBounds, ReductionCatalog,
    ReductionDefinition, ReductionId, SpecialEffect,
};
pub use command::BuilderCommand;
pub use config::BuilderConfig;
pub use error::{CatalogError, ParseIdError, TierError};
pub use pricing::{
    EffectPricing, ReductionContext, ReductionPricing, effect_cost, effect_cost_by_key,
    reduction_cost, reduction_cost_by_key,
};
pub use selection::{DamageSpec, DieFace, RangeShape, Reach, SelectedEffect, SelectedReduction};
pub use store::{Advisory, Balance, BuilderState, TechniqueStore};
pub use summary::{SummaryLine, TechniqueSummary};
pub use tier::{Tier, TierProfile, TierTable};
