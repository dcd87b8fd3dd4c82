//! Serializable form of every store action.
//!
//! Commands let a session be scripted or replayed; applying a command is
//! identical to calling the matching [`TechniqueStore`](crate::TechniqueStore)
//! method.

use strum::IntoStaticStr;

use crate::catalog::{DeliveryType, EffectId, ReductionId};
use crate::selection::{DamageSpec, RangeShape};
use crate::tier::Tier;

#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuilderCommand {
    SetTier(Option<Tier>),
    SetDeliveryType(Option<DeliveryType>),
    SetRange(Option<RangeShape>),
    SetDamage(Option<DamageSpec>),
    AddEffect {
        id: EffectId,
        #[cfg_attr(feature = "serde", serde(default = "default_magnitude"))]
        magnitude: i32,
    },
    RemoveEffect(EffectId),
    UpdateEffect {
        id: EffectId,
        magnitude: i32,
    },
    AddReduction {
        id: ReductionId,
        #[cfg_attr(feature = "serde", serde(default = "default_magnitude"))]
        magnitude: i32,
    },
    RemoveReduction(ReductionId),
    UpdateReduction {
        id: ReductionId,
        magnitude: i32,
    },
    Reset,
}

impl BuilderCommand {
    /// Action name, e.g. `set_tier`.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(feature = "serde")]
fn default_magnitude() -> i32 {
    crate::config::BuilderConfig::DEFAULT_MAGNITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(BuilderCommand::SetTier(None).name(), "set_tier");
        assert_eq!(BuilderCommand::SetDeliveryType(None).name(), "set_delivery_type");
        assert_eq!(BuilderCommand::RemoveReduction(ReductionId::Charge).name(), "remove_reduction");
        assert_eq!(BuilderCommand::Reset.name(), "reset");
    }
}
