/// Builder configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Points charged per damage die.
    pub dice_unit_cost: i32,

    /// Whether the combat delivery type grants its tier-derived discount.
    pub combat_discount: bool,
}

impl BuilderConfig {
    // ===== compile-time constants =====
    pub const DICE_UNIT_COST: i32 = 1;
    /// Magnitude assigned to an option the first time it is toggled on.
    pub const DEFAULT_MAGNITUDE: i32 = 1;

    pub fn new() -> Self {
        Self {
            dice_unit_cost: Self::DICE_UNIT_COST,
            combat_discount: true,
        }
    }

    pub fn with_dice_unit_cost(mut self, dice_unit_cost: i32) -> Self {
        self.dice_unit_cost = dice_unit_cost;
        self
    }

    pub fn with_combat_discount(mut self, enabled: bool) -> Self {
        self.combat_discount = enabled;
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
