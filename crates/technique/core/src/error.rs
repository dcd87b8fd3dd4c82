//! Error types for technique-core.
//!
//! Pricing and recalculation are total functions and never fail. Errors only
//! arise at the edges: constructing a [`Tier`](crate::Tier) from an arbitrary
//! integer, parsing identifier strings, and assembling catalogs from external
//! data.

/// Tier value outside the supported `1..=7` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tier {value} is outside the supported range {min}..={max}")]
pub struct TierError {
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

/// Identifier string that does not name any known option.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} identifier `{key}`")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub key: String,
}

impl ParseIdError {
    pub fn new(kind: &'static str, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

/// Errors raised while assembling catalogs from loaded definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("tier table is missing tier {0}")]
    MissingTier(u8),

    #[error("tier table defines tier {0} more than once")]
    DuplicateTier(u8),

    #[error("{kind} `{key}` is defined more than once")]
    DuplicateEntry { kind: &'static str, key: &'static str },
}
