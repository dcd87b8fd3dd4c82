use crate::config::BuilderConfig;
use crate::tier::Tier;

/// The technique's damage delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageSpec {
    /// Support technique: no dice, no cost.
    Auxiliary,
    SingleTarget {
        dice: u16,
        /// Safeguard dice roll d8 instead of d10/d12. Display only.
        #[cfg_attr(feature = "serde", serde(default))]
        safeguard: bool,
    },
    MultiTarget {
        dice: u16,
    },
}

impl DamageSpec {
    pub const fn single(dice: u16) -> Self {
        Self::SingleTarget {
            dice,
            safeguard: false,
        }
    }

    pub const fn multi(dice: u16) -> Self {
        Self::MultiTarget { dice }
    }

    pub const fn dice(&self) -> u16 {
        match self {
            Self::Auxiliary => 0,
            Self::SingleTarget { dice, .. } | Self::MultiTarget { dice } => *dice,
        }
    }

    pub const fn is_auxiliary(&self) -> bool {
        matches!(self, Self::Auxiliary)
    }

    /// Cost at the default unit cost.
    pub const fn cost(&self) -> i32 {
        self.cost_with(BuilderConfig::DICE_UNIT_COST)
    }

    pub const fn cost_with(&self, unit: i32) -> i32 {
        (self.dice() as i32).saturating_mul(unit)
    }

    /// Die face rolled for this spec at `tier`. Auxiliary damage rolls nothing.
    pub fn die_face(&self, tier: Option<Tier>) -> Option<DieFace> {
        match self {
            Self::Auxiliary => None,
            Self::MultiTarget { .. } => Some(DieFace::D6),
            Self::SingleTarget { safeguard: true, .. } => Some(DieFace::D8),
            Self::SingleTarget { .. } if tier.is_some_and(|t| t.get() > 5) => Some(DieFace::D12),
            Self::SingleTarget { .. } => Some(DieFace::D10),
        }
    }

    /// Dice notation such as `5d10`, or `Técnica Auxiliar`.
    pub fn notation(&self, tier: Option<Tier>) -> String {
        match self.die_face(tier) {
            Some(face) => format!("{}{face}", self.dice()),
            None => "Técnica Auxiliar".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DieFace {
    D6,
    D8,
    D10,
    D12,
}
