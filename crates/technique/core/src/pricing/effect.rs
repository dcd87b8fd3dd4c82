use std::str::FromStr;

use super::{escalating, linear, units};
use crate::catalog::{Catalog, EffectId};
use crate::tier::Tier;

/// Pricing model attached to a catalog effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectPricing {
    /// Constant cost, independent of magnitude.
    Flat { cost: i32 },
    /// `magnitude * unit`.
    Linear { unit: i32 },
    /// First unit costs `base`, every further unit `increment`.
    Escalating { base: i32, increment: i32 },
    /// Fixed cost of one discrete variant (critical range, movement step).
    Mapped { cost: i32 },
    /// `ceil(tier / 2)`.
    HalfTier,
    /// Priced at exactly the entered magnitude.
    FreeEntry,
}

impl EffectPricing {
    pub const fn price(self, tier: Tier, magnitude: i32) -> i32 {
        match self {
            Self::Flat { cost } | Self::Mapped { cost } => cost,
            Self::Linear { unit } => linear(unit, magnitude),
            Self::Escalating { base, increment } => escalating(base, increment, magnitude),
            Self::HalfTier => tier.half_up(),
            Self::FreeEntry => units(magnitude),
        }
    }
}

/// Prices one effect selection.
///
/// Condition effects cost the condition's fixed value whatever the tier.
/// Catalog effects need a tier and price at 0 without one.
pub fn effect_cost(catalog: &Catalog, id: EffectId, tier: Option<Tier>, magnitude: i32) -> i32 {
    match id {
        EffectId::Condition(condition) => catalog.conditions.cost(condition).unwrap_or(0),
        EffectId::Special(effect) => match (tier, catalog.effects.get(effect)) {
            (Some(tier), Some(definition)) => definition.pricing.price(tier, magnitude),
            _ => 0,
        },
    }
}

/// Prices an effect given by its wire identifier; unknown keys price at 0.
pub fn effect_cost_by_key(catalog: &Catalog, key: &str, tier: Option<Tier>, magnitude: i32) -> i32 {
    EffectId::from_str(key)
        .map(|id| effect_cost(catalog, id, tier, magnitude))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::catalog::{Condition, SpecialEffect};

    fn tier(value: u8) -> Option<Tier> {
        Some(Tier::new(value).unwrap())
    }

    #[test]
    fn escalating_damage_increase() {
        let catalog = Catalog::builtin();
        for t in Tier::all() {
            assert_eq!(effect_cost_by_key(&catalog, "aumentar-dano", Some(t), 1), 3);
            assert_eq!(effect_cost_by_key(&catalog, "aumentar-dano", Some(t), 3), 7);
        }
        assert_eq!(effect_cost_by_key(&catalog, "duracao-prolongada", tier(2), 3), 8);
        assert_eq!(effect_cost_by_key(&catalog, "criar-arma", tier(2), 4), 12);
        assert_eq!(effect_cost_by_key(&catalog, "adicionar-voo", tier(2), 3), 4);
    }

    #[test]
    fn zero_magnitude_is_free_unless_magnitude_independent() {
        let catalog = Catalog::builtin();
        let t = tier(5);
        for definition in catalog.effects.iter() {
            let cost = effect_cost(&catalog, definition.id.into(), t, 0);
            match definition.pricing {
                EffectPricing::Linear { .. }
                | EffectPricing::Escalating { .. }
                | EffectPricing::FreeEntry => assert_eq!(cost, 0, "{}", definition.id),
                _ => assert!(cost > 0, "{}", definition.id),
            }
        }
    }

    #[test]
    fn flat_and_mapped_ignore_magnitude() {
        let catalog = Catalog::builtin();
        let cases = [
            (SpecialEffect::SiegeAttack, 2),
            (SpecialEffect::MultiAttack, 6),
            (SpecialEffect::CreateMinion, 8),
            (SpecialEffect::QuickTechnique, 4),
            (SpecialEffect::AutoHit, 4),
            (SpecialEffect::AddAdvantage, 1),
            (SpecialEffect::Critical18, 3),
            (SpecialEffect::Movement6m, 2),
            (SpecialEffect::MovementHalved, 1),
        ];
        for (effect, expected) in cases {
            assert_eq!(effect_cost(&catalog, effect.into(), tier(1), 1), expected);
            assert_eq!(effect_cost(&catalog, effect.into(), tier(7), 5), expected);
        }
    }

    #[test]
    fn linear_units() {
        let catalog = Catalog::builtin();
        assert_eq!(effect_cost(&catalog, SpecialEffect::IncreaseResistance.into(), tier(3), 3), 6);
        assert_eq!(effect_cost(&catalog, SpecialEffect::IncreaseAreaWidth.into(), tier(3), 2), 4);
        assert_eq!(effect_cost(&catalog, SpecialEffect::AddHealing.into(), tier(3), 4), 4);
        assert_eq!(effect_cost(&catalog, SpecialEffect::AddPush.into(), tier(3), -2), 0);
    }

    #[test]
    fn huge_magnitudes_saturate() {
        let catalog = Catalog::builtin();
        let width = SpecialEffect::IncreaseAreaWidth.into();
        let damage = SpecialEffect::IncreaseDamage.into();
        assert_eq!(effect_cost(&catalog, width, tier(3), i32::MAX), i32::MAX);
        assert_eq!(effect_cost(&catalog, damage, tier(3), i32::MAX), i32::MAX);
    }

    #[test]
    fn half_tier_rounds_up() {
        let catalog = Catalog::builtin();
        let expected = [1, 1, 2, 2, 3, 3, 4];
        for (t, cost) in Tier::all().zip(expected) {
            let priced = effect_cost(&catalog, SpecialEffect::ContinuousDamage.into(), Some(t), 1);
            assert_eq!(priced, cost);
        }
    }

    #[test]
    fn conditions_price_without_tier() {
        let catalog = Catalog::builtin();
        assert_eq!(effect_cost(&catalog, Condition::Unconscious.into(), None, 1), 8);
        assert_eq!(effect_cost_by_key(&catalog, "adicionar-condicao-cego", None, 1), 2);
        for condition in Condition::iter() {
            assert!(effect_cost(&catalog, condition.into(), None, 1) > 0);
        }
    }

    #[test]
    fn free_entry_prices_magnitude() {
        let catalog = Catalog::builtin();
        assert_eq!(effect_cost_by_key(&catalog, "condicao-extra", tier(1), 6), 6);
    }

    #[test]
    fn unknown_or_untiered_prices_zero() {
        let catalog = Catalog::builtin();
        assert_eq!(effect_cost_by_key(&catalog, "raio-laser", tier(4), 3), 0);
        assert_eq!(effect_cost(&catalog, SpecialEffect::SiegeAttack.into(), None, 1), 0);
    }
}
