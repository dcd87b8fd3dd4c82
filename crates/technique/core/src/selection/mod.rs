//! Selection records held by the builder state.
//!
//! Costs on selected items are derived: the store re-prices them on every
//! mutation and callers can only read them.

mod damage;
mod range;

pub use damage::{DamageSpec, DieFace};
pub use range::{RangeShape, Reach};

use crate::catalog::{EffectId, ReductionId};

/// An effect in the active set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedEffect {
    pub id: EffectId,
    pub magnitude: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) cost: i32,
}

impl SelectedEffect {
    /// New selection with a zero cost until the store prices it.
    pub fn new(id: impl Into<EffectId>, magnitude: i32) -> Self {
        Self {
            id: id.into(),
            magnitude,
            cost: 0,
        }
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }
}

/// A reduction in the active set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedReduction {
    pub id: ReductionId,
    pub magnitude: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) cost: i32,
}

impl SelectedReduction {
    pub fn new(id: ReductionId, magnitude: i32) -> Self {
        Self {
            id,
            magnitude,
            cost: 0,
        }
    }

    /// Priced cost, always ≤ 0.
    pub fn cost(&self) -> i32 {
        self.cost
    }
}
