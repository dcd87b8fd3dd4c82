//! Point pricing for effects and reductions.
//!
//! Every catalog entry carries a small pricing model (kind + parameters);
//! the functions here dispatch on the model rather than on the identifier.
//! Pricing is total: identifiers without a catalog entry, or keys that do not
//! parse, price at 0.

mod effect;
mod reduction;

pub use effect::{EffectPricing, effect_cost, effect_cost_by_key};
pub use reduction::{ReductionContext, ReductionPricing, reduction_cost, reduction_cost_by_key};

/// `base + (magnitude - 1) * increment` for magnitude ≥ 1, else 0.
/// Saturates at the `i32` bounds.
const fn escalating(base: i32, increment: i32, magnitude: i32) -> i32 {
    if magnitude < 1 {
        0
    } else {
        base.saturating_add((magnitude - 1).saturating_mul(increment))
    }
}

/// `magnitude * unit`, saturating; magnitudes below zero price as zero.
const fn linear(unit: i32, magnitude: i32) -> i32 {
    units(magnitude).saturating_mul(unit)
}

/// Magnitudes below zero price as zero.
const fn units(magnitude: i32) -> i32 {
    if magnitude < 0 { 0 } else { magnitude }
}
