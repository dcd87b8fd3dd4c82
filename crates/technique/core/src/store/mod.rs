//! The selection store and its recalculation.
//!
//! [`TechniqueStore`] is the single writer of [`BuilderState`]. Every action
//! ends with a full re-price of every selected item against the current tier,
//! delivery type and damage spec, followed by one assignment of the new item
//! lists and [`Balance`]. There is no dirty state between actions.

mod advisory;
mod gating;
mod state;

pub use advisory::Advisory;
pub use state::{Balance, BuilderState};

use std::sync::Arc;

use crate::catalog::{Catalog, DeliveryType, EffectId, ReductionId};
use crate::command::BuilderCommand;
use crate::config::BuilderConfig;
use crate::pricing::{ReductionContext, effect_cost, reduction_cost};
use crate::selection::{DamageSpec, RangeShape, SelectedEffect, SelectedReduction};
use crate::summary::TechniqueSummary;
use crate::tier::Tier;

#[derive(Clone, Debug)]
pub struct TechniqueStore {
    catalog: Arc<Catalog>,
    config: BuilderConfig,
    state: BuilderState,
}

impl TechniqueStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, BuilderConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: BuilderConfig) -> Self {
        Self {
            catalog,
            config,
            state: BuilderState::default(),
        }
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.state.advisories(&self.catalog)
    }

    pub fn summary(&self, name: impl Into<String>) -> TechniqueSummary {
        TechniqueSummary::new(name, &self.state, &self.catalog)
    }

    // ===== actions =====

    pub fn set_tier(&mut self, tier: Option<Tier>) {
        self.state.tier = tier;
        self.recalculate();
    }

    pub fn set_delivery_type(&mut self, delivery: Option<DeliveryType>) {
        self.state.delivery = delivery;
        self.recalculate();
    }

    pub fn set_range(&mut self, range: Option<RangeShape>) {
        self.state.range = range;
        self.recalculate();
    }

    pub fn set_damage(&mut self, damage: Option<DamageSpec>) {
        self.state.damage = damage;
        self.recalculate();
    }

    /// Adds or replaces an effect, evicting any member of its exclusive group.
    pub fn add_effect(&mut self, effect: SelectedEffect) {
        self.insert_effect(effect.id, effect.magnitude);
        self.recalculate();
    }

    pub fn remove_effect(&mut self, id: EffectId) {
        self.state.effects.retain(|effect| effect.id != id);
        self.recalculate();
    }

    /// Upserts `id` with `magnitude`; a magnitude ≤ 0 removes it.
    pub fn update_effect(&mut self, id: EffectId, magnitude: i32) {
        if magnitude <= 0 {
            return self.remove_effect(id);
        }
        self.insert_effect(id, magnitude);
        self.recalculate();
    }

    pub fn add_reduction(&mut self, reduction: SelectedReduction) {
        self.insert_reduction(reduction.id, reduction.magnitude);
        self.recalculate();
    }

    pub fn remove_reduction(&mut self, id: ReductionId) {
        self.state.reductions.retain(|reduction| reduction.id != id);
        self.recalculate();
    }

    /// Upserts `id` with `magnitude`; a magnitude ≤ 0 removes it.
    ///
    /// Accepted even past the reduction cap. Gate with
    /// [`BuilderState::can_set_reduction_magnitude`].
    pub fn update_reduction(&mut self, id: ReductionId, magnitude: i32) {
        if magnitude <= 0 {
            return self.remove_reduction(id);
        }
        self.insert_reduction(id, magnitude);
        self.recalculate();
    }

    /// Clears every selection and total.
    pub fn reset(&mut self) {
        self.state = BuilderState::default();
    }

    pub fn apply(&mut self, command: BuilderCommand) {
        match command {
            BuilderCommand::SetTier(tier) => self.set_tier(tier),
            BuilderCommand::SetDeliveryType(delivery) => self.set_delivery_type(delivery),
            BuilderCommand::SetRange(range) => self.set_range(range),
            BuilderCommand::SetDamage(damage) => self.set_damage(damage),
            BuilderCommand::AddEffect { id, magnitude } => {
                self.add_effect(SelectedEffect::new(id, magnitude))
            }
            BuilderCommand::RemoveEffect(id) => self.remove_effect(id),
            BuilderCommand::UpdateEffect { id, magnitude } => self.update_effect(id, magnitude),
            BuilderCommand::AddReduction { id, magnitude } => {
                self.add_reduction(SelectedReduction::new(id, magnitude))
            }
            BuilderCommand::RemoveReduction(id) => self.remove_reduction(id),
            BuilderCommand::UpdateReduction { id, magnitude } => {
                self.update_reduction(id, magnitude)
            }
            BuilderCommand::Reset => self.reset(),
        }
    }

    fn insert_effect(&mut self, id: EffectId, magnitude: i32) {
        let effects = &mut self.state.effects;
        effects.retain(|effect| !id.conflicts_with(effect.id));
        match effects.iter_mut().find(|effect| effect.id == id) {
            Some(effect) => effect.magnitude = magnitude,
            None => effects.push(SelectedEffect::new(id, magnitude)),
        }
    }

    fn insert_reduction(&mut self, id: ReductionId, magnitude: i32) {
        let reductions = &mut self.state.reductions;
        match reductions.iter_mut().find(|reduction| reduction.id == id) {
            Some(reduction) => reduction.magnitude = magnitude,
            None => reductions.push(SelectedReduction::new(id, magnitude)),
        }
    }

    /// Re-prices every selection and publishes the new lists and balance
    /// in one assignment. Without a tier every cost and total is zero.
    fn recalculate(&mut self) {
        let catalog = &*self.catalog;
        let state = &self.state;
        let tier = state.tier;

        let effects: Vec<SelectedEffect> = state
            .effects
            .iter()
            .map(|effect| SelectedEffect {
                cost: tier.map_or(0, |_| effect_cost(catalog, effect.id, tier, effect.magnitude)),
                ..effect.clone()
            })
            .collect();

        let context = ReductionContext::new(tier, state.delivery, state.damage.as_ref());
        let reductions: Vec<SelectedReduction> = state
            .reductions
            .iter()
            .map(|reduction| SelectedReduction {
                cost: reduction_cost(catalog, reduction.id, &context, reduction.magnitude),
                ..reduction.clone()
            })
            .collect();

        let balance = match tier {
            Some(tier) => self.balance(tier, &effects, &reductions),
            None => Balance::default(),
        };

        self.state.effects = effects;
        self.state.reductions = reductions;
        self.state.balance = balance;
    }

    fn balance(
        &self,
        tier: Tier,
        effects: &[SelectedEffect],
        reductions: &[SelectedReduction],
    ) -> Balance {
        let damage_cost = self
            .state
            .damage
            .map_or(0, |damage| damage.cost_with(self.config.dice_unit_cost));
        let effect_total = effects
            .iter()
            .map(SelectedEffect::cost)
            .fold(0, i32::saturating_add);

        let raw_reduction_total = reductions
            .iter()
            .map(SelectedReduction::cost)
            .fold(0, i32::saturating_add);
        let cap = tier.reduction_cap();
        let applied_reduction = raw_reduction_total.max(cap);

        let discount = match self.state.delivery {
            Some(delivery) if self.config.combat_discount => delivery.discount(tier),
            _ => 0,
        };

        let points_spent = damage_cost
            .saturating_add(effect_total)
            .saturating_add(applied_reduction)
            .saturating_sub(discount);
        let max_points = self.catalog.tiers.max_points(tier);

        Balance {
            points_spent,
            max_points,
            points_available: max_points.saturating_sub(points_spent),
            raw_reduction_total,
            applied_reduction,
            reduction_cap_exceeded: raw_reduction_total < cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Condition, SpecialEffect};

    fn store() -> TechniqueStore {
        TechniqueStore::new(Arc::new(Catalog::builtin()))
    }

    fn tier(value: u8) -> Option<Tier> {
        Some(Tier::new(value).unwrap())
    }

    #[test]
    fn round_trip_example() {
        let mut store = store();
        store.set_tier(tier(4));
        store.set_delivery_type(Some(DeliveryType::Ability));
        store.set_damage(Some(DamageSpec::single(5)));
        store.add_effect(SelectedEffect::new(SpecialEffect::SiegeAttack, 1));

        let state = store.state();
        assert_eq!(state.points_spent(), 7);
        assert_eq!(state.max_points(), 9);
        assert_eq!(state.points_available(), 2);
    }

    #[test]
    fn combat_discount_rounds_up() {
        let mut store = store();
        store.set_tier(tier(5));
        store.set_damage(Some(DamageSpec::single(4)));
        store.set_delivery_type(Some(DeliveryType::Combat));
        assert_eq!(store.state().points_spent(), 4 - 3);

        let disabled = BuilderConfig::default().with_combat_discount(false);
        let mut store = TechniqueStore::with_config(Arc::new(Catalog::builtin()), disabled);
        store.set_tier(tier(5));
        store.set_damage(Some(DamageSpec::single(4)));
        store.set_delivery_type(Some(DeliveryType::Combat));
        assert_eq!(store.state().points_spent(), 4);
    }

    #[test]
    fn combat_discount_alone_goes_below_zero() {
        let mut store = store();
        store.set_tier(tier(5));
        store.set_delivery_type(Some(DeliveryType::Combat));

        let state = store.state();
        assert_eq!(state.points_spent(), -3);
        assert_eq!(state.max_points(), 12);
        assert_eq!(state.points_available(), 15);
    }

    #[test]
    fn huge_magnitudes_saturate() {
        let mut store = store();
        store.set_tier(tier(3));
        store.update_reduction(ReductionId::Exhausting, 1_000_000_000);
        store.update_reduction(ReductionId::SideEffect, i32::MAX);

        let balance = *store.state().balance();
        assert_eq!(balance.raw_reduction_total, i32::MIN);
        assert_eq!(balance.applied_reduction, -3);
        assert!(balance.reduction_cap_exceeded);

        store.update_effect(SpecialEffect::AddHealing.into(), i32::MAX);
        store.update_effect(SpecialEffect::AddPush.into(), 5);
        store.update_effect(SpecialEffect::IncreaseDamage.into(), i32::MAX);

        let state = store.state();
        let healing = state.effect(SpecialEffect::AddHealing.into());
        assert_eq!(healing.map(SelectedEffect::cost), Some(i32::MAX));
        assert_eq!(state.points_spent(), i32::MAX - 3);
        assert!(state.points_available() < 0);
    }

    #[test]
    fn reduction_total_is_clamped_to_tier() {
        let mut store = store();
        store.set_tier(tier(3));
        store.set_damage(Some(DamageSpec::single(6)));
        store.update_reduction(ReductionId::Exhausting, 1);
        store.update_reduction(ReductionId::SlowTechnique, 1);

        let balance = *store.state().balance();
        assert_eq!(balance.raw_reduction_total, -7);
        assert_eq!(balance.applied_reduction, -3);
        assert!(balance.reduction_cap_exceeded);
        assert_eq!(balance.points_spent, 6 - 3);
    }

    #[test]
    fn cap_boundary_is_not_exceeded() {
        let mut store = store();
        store.set_tier(tier(3));
        store.update_reduction(ReductionId::SlowTechnique, 1);
        let balance = store.state().balance();
        assert_eq!(balance.raw_reduction_total, -3);
        assert!(!balance.reduction_cap_exceeded);
    }

    #[test]
    fn tier_change_reprices_everything() {
        let mut store = store();
        store.set_tier(tier(2));
        store.update_effect(SpecialEffect::ContinuousDamage.into(), 1);
        assert_eq!(store.state().effects()[0].cost(), 1);

        store.set_tier(tier(7));
        assert_eq!(store.state().effects()[0].cost(), 4);
        assert_eq!(store.state().max_points(), 20);
    }

    #[test]
    fn null_tier_collapses_totals() {
        let mut store = store();
        store.set_tier(tier(4));
        store.set_damage(Some(DamageSpec::single(3)));
        store.update_effect(SpecialEffect::SiegeAttack.into(), 1);
        store.update_effect(Condition::Blinded.into(), 1);

        store.set_tier(None);
        let state = store.state();
        assert_eq!(*state.balance(), Balance::default());
        assert_eq!(state.effects().len(), 2);
        assert!(state.effects().iter().all(|effect| effect.cost() == 0));
        assert_eq!(state.damage(), Some(&DamageSpec::single(3)));
    }

    #[test]
    fn update_is_an_idempotent_upsert() {
        let mut store = store();
        store.set_tier(tier(4));
        let id = EffectId::from(SpecialEffect::IncreaseDamage);

        store.update_effect(id, 2);
        let spent = store.state().points_spent();
        store.update_effect(id, 2);
        assert_eq!(store.state().points_spent(), spent);
        assert_eq!(store.state().effects().iter().filter(|e| e.id == id).count(), 1);

        store.update_effect(id, 0);
        assert!(store.state().effect(id).is_none());
        assert_eq!(store.state().points_spent(), 0);
    }

    #[test]
    fn exclusive_group_members_evict_each_other() {
        let mut store = store();
        store.set_tier(tier(4));
        store.add_effect(SelectedEffect::new(SpecialEffect::Critical19, 1));
        store.update_effect(SpecialEffect::Critical18.into(), 1);

        let ids: Vec<_> = store.state().effects().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EffectId::from(SpecialEffect::Critical18)]);
        assert_eq!(store.state().points_spent(), 3);

        store.add_effect(SelectedEffect::new(SpecialEffect::Movement3m, 1));
        store.add_effect(SelectedEffect::new(SpecialEffect::MovementZero, 1));
        assert_eq!(store.state().effects().len(), 3);
    }

    #[test]
    fn non_offensive_follows_context_changes() {
        let mut store = store();
        store.set_tier(tier(4));
        store.set_delivery_type(Some(DeliveryType::Combat));
        store.update_reduction(ReductionId::NonOffensive, 1);
        assert_eq!(store.state().raw_reduction_total(), -2);

        store.set_damage(Some(DamageSpec::Auxiliary));
        assert_eq!(store.state().raw_reduction_total(), -1);

        store.set_delivery_type(Some(DeliveryType::Ability));
        store.set_damage(Some(DamageSpec::single(1)));
        assert_eq!(store.state().raw_reduction_total(), 0);
        assert!(store.advisories().contains(&Advisory::NonOffensiveOutOfContext));
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = store();
        store.set_tier(tier(6));
        store.set_range(Some(RangeShape::Cone));
        store.update_effect(SpecialEffect::MultiAttack.into(), 1);
        store.update_reduction(ReductionId::Charge, 1);

        store.reset();
        assert_eq!(*store.state(), BuilderState::default());
    }

    #[test]
    fn gating_blocks_growth_past_the_cap() {
        let mut store = store();
        store.set_tier(tier(2));
        store.update_reduction(ReductionId::Debilitating, 1);
        let state = store.state();
        assert!(state.reduction_cap_exceeded());
        assert!(!state.can_add_reduction(ReductionId::SlowTechnique));
        assert!(!state.can_set_reduction_magnitude(ReductionId::Debilitating, 2));
        assert!(state.can_set_reduction_magnitude(ReductionId::Debilitating, 1));
        assert!(state.can_set_reduction_magnitude(ReductionId::Debilitating, 0));

        store.update_reduction(ReductionId::Debilitating, 5);
        assert_eq!(store.state().balance().applied_reduction, -2);
    }

    #[test]
    fn gating_hides_non_offensive_outside_context() {
        let mut store = store();
        store.set_tier(tier(3));
        assert!(!store.state().can_add_reduction(ReductionId::NonOffensive));
        store.set_damage(Some(DamageSpec::Auxiliary));
        assert!(store.state().can_add_reduction(ReductionId::NonOffensive));
    }

    #[test]
    fn advisories_report_out_of_bounds_values() {
        let mut store = store();
        assert_eq!(store.advisories(), vec![Advisory::TierNotSelected]);

        store.set_tier(tier(1));
        store.set_damage(Some(DamageSpec::multi(4)));
        store.update_effect(SpecialEffect::IncreaseDamage.into(), 5);
        let advisories = store.advisories();
        assert!(advisories.contains(&Advisory::DiceAboveMax { dice: 4, max: 2 }));
        assert!(advisories.contains(&Advisory::EffectAboveMax {
            id: SpecialEffect::IncreaseDamage.into(),
            magnitude: 5,
            max: 3,
        }));
        assert_eq!(store.state().effects()[0].cost(), 3 + 4 * 2);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut store = store();
        store.apply(BuilderCommand::SetTier(tier(4)));
        store.apply(BuilderCommand::SetDamage(Some(DamageSpec::single(2))));
        store.apply(BuilderCommand::AddEffect {
            id: SpecialEffect::SiegeAttack.into(),
            magnitude: 1,
        });
        store.apply(BuilderCommand::UpdateReduction {
            id: ReductionId::ReduceArea,
            magnitude: 1,
        });
        assert_eq!(store.state().points_spent(), 2 + 2 - 1);

        store.apply(BuilderCommand::Reset);
        assert_eq!(store.state().tier(), None);
    }
}
