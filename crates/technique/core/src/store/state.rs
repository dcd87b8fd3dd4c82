use crate::catalog::{DeliveryType, EffectId, ReductionId};
use crate::selection::{DamageSpec, RangeShape, SelectedEffect, SelectedReduction};
use crate::tier::Tier;

/// Derived totals, always recomputed together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Balance {
    pub points_spent: i32,
    pub max_points: i32,
    /// `max_points - points_spent`; negative when over budget.
    pub points_available: i32,
    /// Sum of every reduction cost before the cap (≤ 0).
    pub raw_reduction_total: i32,
    /// `max(raw_reduction_total, -tier)`.
    pub applied_reduction: i32,
    pub reduction_cap_exceeded: bool,
}

/// The builder's current choices and their derived balance.
///
/// Only [`TechniqueStore`](super::TechniqueStore) mutates this; everything here
/// is read-only from outside the crate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuilderState {
    pub(crate) tier: Option<Tier>,
    pub(crate) delivery: Option<DeliveryType>,
    pub(crate) range: Option<RangeShape>,
    pub(crate) damage: Option<DamageSpec>,
    pub(crate) effects: Vec<SelectedEffect>,
    pub(crate) reductions: Vec<SelectedReduction>,
    pub(crate) balance: Balance,
}

impl BuilderState {
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn delivery_type(&self) -> Option<DeliveryType> {
        self.delivery
    }

    pub fn range(&self) -> Option<RangeShape> {
        self.range
    }

    pub fn damage(&self) -> Option<&DamageSpec> {
        self.damage.as_ref()
    }

    pub fn effects(&self) -> &[SelectedEffect] {
        &self.effects
    }

    pub fn reductions(&self) -> &[SelectedReduction] {
        &self.reductions
    }

    pub fn effect(&self, id: EffectId) -> Option<&SelectedEffect> {
        self.effects.iter().find(|effect| effect.id == id)
    }

    pub fn reduction(&self, id: ReductionId) -> Option<&SelectedReduction> {
        self.reductions.iter().find(|reduction| reduction.id == id)
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn points_spent(&self) -> i32 {
        self.balance.points_spent
    }

    pub fn max_points(&self) -> i32 {
        self.balance.max_points
    }

    pub fn points_available(&self) -> i32 {
        self.balance.points_available
    }

    pub fn raw_reduction_total(&self) -> i32 {
        self.balance.raw_reduction_total
    }

    pub fn reduction_cap_exceeded(&self) -> bool {
        self.balance.reduction_cap_exceeded
    }

    /// Whether the non-offensive reduction applies to the current build:
    /// combat delivery or auxiliary damage.
    pub fn non_offensive_available(&self) -> bool {
        self.delivery == Some(DeliveryType::Combat)
            || self.damage.is_some_and(|damage| damage.is_auxiliary())
    }
}
