use std::str::FromStr;

use super::{escalating, linear, units};
use crate::catalog::{Catalog, DeliveryType, ReductionId};
use crate::selection::DamageSpec;
use crate::tier::Tier;

/// Pricing model attached to a reduction.
///
/// Parameters are positive point amounts; the priced cost is their negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReductionPricing {
    Flat { points: i32 },
    Linear { unit: i32 },
    Escalating { base: i32, increment: i32 },
    /// One point per entered unit.
    FreeEntry,
    /// Depends on the rest of the build: `auxiliary` when the damage spec is
    /// auxiliary, otherwise `combat` for combat delivery, otherwise nothing.
    Contextual { combat: i32, auxiliary: i32 },
    /// Listed for reference only; never lowers the total.
    Narrative,
}

/// The parts of the builder state a reduction price may depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionContext<'a> {
    pub tier: Option<Tier>,
    pub delivery: Option<DeliveryType>,
    pub damage: Option<&'a DamageSpec>,
}

impl<'a> ReductionContext<'a> {
    pub fn new(
        tier: Option<Tier>,
        delivery: Option<DeliveryType>,
        damage: Option<&'a DamageSpec>,
    ) -> Self {
        Self {
            tier,
            delivery,
            damage,
        }
    }

    pub fn damage_is_auxiliary(&self) -> bool {
        self.damage.is_some_and(DamageSpec::is_auxiliary)
    }
}

impl ReductionPricing {
    /// Returns the (non-positive) cost of this model.
    pub fn price(self, context: &ReductionContext<'_>, magnitude: i32) -> i32 {
        let points = match self {
            Self::Flat { points } => points,
            Self::Linear { unit } => linear(unit, magnitude),
            Self::Escalating { base, increment } => escalating(base, increment, magnitude),
            Self::FreeEntry => units(magnitude),
            Self::Contextual { combat, auxiliary } => {
                if context.damage_is_auxiliary() {
                    auxiliary
                } else if context.delivery == Some(DeliveryType::Combat) {
                    combat
                } else {
                    0
                }
            }
            Self::Narrative => 0,
        };
        -points.max(0)
    }
}

/// Prices one reduction selection. Without a tier nothing is priced.
pub fn reduction_cost(
    catalog: &Catalog,
    id: ReductionId,
    context: &ReductionContext<'_>,
    magnitude: i32,
) -> i32 {
    if context.tier.is_none() {
        return 0;
    }
    catalog
        .reductions
        .get(id)
        .map_or(0, |definition| definition.pricing.price(context, magnitude))
}

/// Prices a reduction given by its wire identifier; unknown keys price at 0.
pub fn reduction_cost_by_key(
    catalog: &Catalog,
    key: &str,
    context: &ReductionContext<'_>,
    magnitude: i32,
) -> i32 {
    ReductionId::from_str(key)
        .map(|id| reduction_cost(catalog, id, context, magnitude))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn context(
        delivery: Option<DeliveryType>,
        damage: Option<&DamageSpec>,
    ) -> ReductionContext<'_> {
        ReductionContext::new(Tier::new(4).ok(), delivery, damage)
    }

    #[test]
    fn fixed_linear_and_escalating() {
        let catalog = Catalog::builtin();
        let ctx = context(None, None);
        assert_eq!(reduction_cost(&catalog, ReductionId::SlowTechnique, &ctx, 1), -3);
        assert_eq!(reduction_cost(&catalog, ReductionId::StaminaDraining, &ctx, 1), -3);
        assert_eq!(reduction_cost(&catalog, ReductionId::ReduceArea, &ctx, 3), -3);
        assert_eq!(reduction_cost(&catalog, ReductionId::Debilitating, &ctx, 2), -6);
        assert_eq!(reduction_cost(&catalog, ReductionId::Exhausting, &ctx, 2), -8);
        assert_eq!(reduction_cost(&catalog, ReductionId::CrucialConcentration, &ctx, 0), 0);
        assert_eq!(reduction_cost(&catalog, ReductionId::CrucialConcentration, &ctx, 1), -2);
        assert_eq!(reduction_cost(&catalog, ReductionId::CrucialConcentration, &ctx, 4), -5);
    }

    #[test]
    fn free_entry_accepts_any_non_negative_value() {
        let catalog = Catalog::builtin();
        let ctx = context(None, None);
        assert_eq!(reduction_cost_by_key(&catalog, "efeito-colateral", &ctx, 20), -20);
        assert_eq!(reduction_cost_by_key(&catalog, "requisito-limitador", &ctx, 0), 0);
        assert_eq!(reduction_cost_by_key(&catalog, "tecnica-dependente", &ctx, -4), 0);
    }

    #[test]
    fn non_offensive_depends_on_context() {
        let catalog = Catalog::builtin();
        let id = ReductionId::NonOffensive;
        let auxiliary = DamageSpec::Auxiliary;
        let single = DamageSpec::SingleTarget {
            dice: 3,
            safeguard: false,
        };

        let combat = context(Some(DeliveryType::Combat), Some(&single));
        assert_eq!(reduction_cost(&catalog, id, &combat, 1), -2);

        let ability_auxiliary = context(Some(DeliveryType::Ability), Some(&auxiliary));
        assert_eq!(reduction_cost(&catalog, id, &ability_auxiliary, 1), -1);

        let combat_auxiliary = context(Some(DeliveryType::Combat), Some(&auxiliary));
        assert_eq!(reduction_cost(&catalog, id, &combat_auxiliary, 1), -1);

        let neither = context(Some(DeliveryType::Ability), Some(&single));
        assert_eq!(reduction_cost(&catalog, id, &neither, 1), 0);
        assert_eq!(reduction_cost(&catalog, id, &context(None, None), 1), 0);
    }

    #[test]
    fn narrative_entries_never_price() {
        let catalog = Catalog::builtin();
        let ctx = context(Some(DeliveryType::Combat), None);
        for id in [
            ReductionId::LimitedDuration,
            ReductionId::SpecificCondition,
            ReductionId::Charge,
        ] {
            assert_eq!(reduction_cost(&catalog, id, &ctx, 1), 0);
        }
    }

    #[test]
    fn costs_are_never_positive() {
        let catalog = Catalog::builtin();
        let auxiliary = DamageSpec::Auxiliary;
        let ctx = context(Some(DeliveryType::Combat), Some(&auxiliary));
        for id in ReductionId::iter() {
            for magnitude in -3..=10 {
                assert!(reduction_cost(&catalog, id, &ctx, magnitude) <= 0);
            }
        }
    }

    #[test]
    fn unknown_or_untiered_prices_zero() {
        let catalog = Catalog::builtin();
        let ctx = context(None, None);
        assert_eq!(reduction_cost_by_key(&catalog, "tecnica-lenta", &ctx, 2), 0);
        let untiered = ReductionContext::default();
        assert_eq!(reduction_cost(&catalog, ReductionId::SlowTechnique, &untiered, 1), 0);
    }
}
