//! Identifiers serialize as their kebab-case wire strings.

use crate::catalog::{Condition, DeliveryType, EffectId, ReductionId, SpecialEffect};
use crate::error::ParseIdError;
use crate::selection::RangeShape;

macro_rules! impl_string_serde {
    ($($ty:ty => $kind:literal),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let key = String::deserialize(deserializer)?;
                key.parse()
                    .map_err(|_| serde::de::Error::custom(ParseIdError::new($kind, key)))
            }
        }
    )*};
}

impl_string_serde! {
    SpecialEffect => "effect",
    Condition => "condition",
    EffectId => "effect",
    ReductionId => "reduction",
    DeliveryType => "delivery type",
    RangeShape => "range shape",
}
