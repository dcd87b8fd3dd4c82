//! Data-driven catalog content and loaders.
//!
//! This crate reads the builder's reference data from RON/TOML files:
//! - Tier table (RON)
//! - Effect catalog with pricing models (RON)
//! - Reduction catalog with pricing models (RON)
//! - Condition table (RON)
//! - Builder configuration (TOML)
//! - Command scripts for replaying a session (RON)
//!
//! Loaded data is assembled into a [`technique_core::Catalog`]; any catalog
//! file missing from a data directory falls back to the built-in data.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConditionLoader, ConfigLoader, ContentFactory, EffectLoader, LoadResult, ReductionLoader,
    ScriptLoader, TierLoader,
};
