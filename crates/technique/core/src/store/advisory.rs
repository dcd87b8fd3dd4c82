//! Non-fatal observations about the current build.
//!
//! Nothing the store accepts is ever rejected. Advisories report the states a
//! caller may want to surface or gate on.

use core::fmt;

use super::state::BuilderState;
use crate::catalog::{Catalog, EffectId, ReductionId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    TierNotSelected,
    ReductionCapExceeded { raw: i32, cap: i32 },
    EffectAboveMax { id: EffectId, magnitude: i32, max: i32 },
    ReductionAboveMax { id: ReductionId, magnitude: i32, max: i32 },
    DiceAboveMax { dice: u16, max: u16 },
    NonOffensiveOutOfContext,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TierNotSelected => f.write_str("no tier selected; nothing is priced"),
            Self::ReductionCapExceeded { raw, cap } => {
                write!(f, "reductions total {raw}, only {cap} applied")
            }
            Self::EffectAboveMax { id, magnitude, max } => {
                write!(f, "effect `{id}` magnitude {magnitude} exceeds max {max}")
            }
            Self::ReductionAboveMax { id, magnitude, max } => {
                write!(f, "reduction `{id}` magnitude {magnitude} exceeds max {max}")
            }
            Self::DiceAboveMax { dice, max } => {
                write!(f, "{dice} damage dice exceed the tier's max of {max}")
            }
            Self::NonOffensiveOutOfContext => f.write_str(
                "non-offensive reduction needs combat delivery or auxiliary damage",
            ),
        }
    }
}

impl BuilderState {
    pub fn advisories(&self, catalog: &Catalog) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        let Some(tier) = self.tier else {
            advisories.push(Advisory::TierNotSelected);
            return advisories;
        };

        if self.balance.reduction_cap_exceeded {
            advisories.push(Advisory::ReductionCapExceeded {
                raw: self.balance.raw_reduction_total,
                cap: tier.reduction_cap(),
            });
        }

        for effect in &self.effects {
            if let Some(bounds) = catalog.effect_bounds(effect.id)
                && effect.magnitude > bounds.max
            {
                advisories.push(Advisory::EffectAboveMax {
                    id: effect.id,
                    magnitude: effect.magnitude,
                    max: bounds.max,
                });
            }
        }

        for reduction in &self.reductions {
            if let Some(bounds) = catalog.reduction_bounds(reduction.id)
                && reduction.magnitude > bounds.max
            {
                advisories.push(Advisory::ReductionAboveMax {
                    id: reduction.id,
                    magnitude: reduction.magnitude,
                    max: bounds.max,
                });
            }
        }

        if let Some(damage) = &self.damage {
            let max = catalog.tiers.max_dice(tier);
            if damage.dice() > max {
                advisories.push(Advisory::DiceAboveMax {
                    dice: damage.dice(),
                    max,
                });
            }
        }

        if self.reduction(ReductionId::NonOffensive).is_some() && !self.non_offensive_available() {
            advisories.push(Advisory::NonOffensiveOutOfContext);
        }

        advisories
    }
}
