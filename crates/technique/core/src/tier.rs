//! Power tiers and the tier table.
//!
//! A technique's tier (1..=7) fixes its point budget and the maximum number of
//! damage dice. Several pricing rules also derive from the tier directly:
//! half the tier rounded up (combat discount, tier-derived effects) and the
//! reduction cap (the tier itself, as a negative bound).

use crate::error::{CatalogError, TierError};

/// Technique power level, guaranteed to be within `1..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub const fn new(value: u8) -> Result<Self, TierError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(TierError {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// `ceil(tier / 2)`.
    pub const fn half_up(self) -> i32 {
        (self.0 as i32 + 1) / 2
    }

    /// Lower bound for the applied reduction total (`-tier`).
    pub const fn reduction_cap(self) -> i32 {
        -(self.0 as i32)
    }

    /// Iterates over every valid tier in ascending order.
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN..=Self::MAX).map(Tier)
    }

    const fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<u8> for Tier {
    type Error = TierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Budget and damage allowance for a single tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierProfile {
    pub tier: Tier,
    pub max_points: i32,
    pub max_dice: u16,
    pub description: String,
}

impl TierProfile {
    pub fn new(tier: Tier, max_points: i32, max_dice: u16, description: impl Into<String>) -> Self {
        Self {
            tier,
            max_points,
            max_dice,
            description: description.into(),
        }
    }
}

/// Complete tier table: exactly one profile per tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierTable {
    profiles: Vec<TierProfile>,
}

impl TierTable {
    /// Builds a table from loaded profiles, in any order.
    ///
    /// Every tier must appear exactly once.
    pub fn from_profiles(profiles: Vec<TierProfile>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<TierProfile>> = Tier::all().map(|_| None).collect();
        for profile in profiles {
            let slot = &mut slots[profile.tier.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateTier(profile.tier.get()));
            }
            *slot = Some(profile);
        }

        let profiles = slots
            .into_iter()
            .zip(Tier::all())
            .map(|(slot, tier)| slot.ok_or(CatalogError::MissingTier(tier.get())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { profiles })
    }

    pub fn builtin() -> Self {
        const ROWS: [(u8, i32, u16, &str); 7] = [
            (
                1,
                2,
                2,
                "2d10 em um único alvo ou 2d6 em múltiplos alvos. Esfera: até 3m. Cone: até 12m. Linha: toque ou 9m.",
            ),
            (
                2,
                4,
                4,
                "4d10 em um único alvo ou 4d6 em múltiplos alvos. Esfera: até 4,5m. Cone: até 15m. Linha: toque ou 15m.",
            ),
            (
                3,
                6,
                6,
                "6d10 em um único alvo ou 6d6 em múltiplos alvos. Esfera: até 6m. Cone: até 18m. Linha: toque ou 21m.",
            ),
            (
                4,
                9,
                9,
                "9d10 em um único alvo ou 9d6 em múltiplos alvos. Esfera: até 7,5m. Cone: até 21m. Linha: toque ou 27m.",
            ),
            (
                5,
                12,
                12,
                "12d10 em um único alvo ou 12d6 em múltiplos alvos. Esfera: até 9m. Cone: até 24m. Linha: toque ou 33m.",
            ),
            (
                6,
                16,
                16,
                "16d12 em um único alvo ou 16d6 em múltiplos alvos. Esfera: até 10,5m. Cone: até 27m. Linha: toque ou 39m.",
            ),
            (
                7,
                20,
                20,
                "20d12 em um único alvo ou 20d6 em múltiplos alvos. Esfera: até 12m. Cone: até 30m. Linha: toque ou 45m.",
            ),
        ];

        let profiles = ROWS
            .iter()
            .zip(Tier::all())
            .map(|(&(_, max_points, max_dice, description), tier)| {
                TierProfile::new(tier, max_points, max_dice, description)
            })
            .collect();

        Self { profiles }
    }

    pub fn profile(&self, tier: Tier) -> &TierProfile {
        &self.profiles[tier.index()]
    }

    pub fn max_points(&self, tier: Tier) -> i32 {
        self.profile(tier).max_points
    }

    pub fn max_dice(&self, tier: Tier) -> u16 {
        self.profile(tier).max_dice
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierProfile> {
        self.profiles.iter()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}
