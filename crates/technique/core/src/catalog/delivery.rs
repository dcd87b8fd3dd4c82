//! Delivery types: how the technique is classified.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::tier::Tier;

/// Technique delivery type.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum DeliveryType {
    /// Combat technique; discounts `ceil(tier / 2)` points.
    #[strum(serialize = "combate")]
    Combat,
    /// Devil-fruit ability; no discount.
    #[strum(serialize = "fruta")]
    Ability,
}

impl DeliveryType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Points this delivery type removes from the total at `tier`.
    pub const fn discount(self, tier: Tier) -> i32 {
        match self {
            Self::Combat => tier.half_up(),
            Self::Ability => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryDefinition {
    pub id: DeliveryType,
    pub label: String,
    pub description: String,
}

impl DeliveryDefinition {
    pub fn builtin() -> Vec<Self> {
        vec![
            Self {
                id: DeliveryType::Combat,
                label: "Técnica de Combate".to_owned(),
                description: "Reduz pontos dinâmicos com base no Grau.".to_owned(),
            },
            Self {
                id: DeliveryType::Ability,
                label: "Técnica de Fruta".to_owned(),
                description: "Adiciona 0 pontos.".to_owned(),
            },
        ]
    }
}
