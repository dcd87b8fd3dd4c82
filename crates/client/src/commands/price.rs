//! Price one effect or reduction without building a technique.

use anyhow::Result;
use clap::Parser;
use technique_core::{
    DamageSpec, EffectId, ReductionContext, ReductionId, effect_cost_by_key, reduction_cost_by_key,
};

use super::{DeliveryArg, parse_tier};
use crate::config::ClientConfig;

/// Price an effect
#[derive(Parser)]
pub struct PriceEffect {
    /// Effect identifier (e.g. aumentar-dano, adicionar-condicao-cego)
    #[arg(value_name = "EFFECT")]
    id: String,

    /// Technique tier (1-7)
    #[arg(short, long)]
    tier: Option<u8>,

    /// Magnitude (selection count or entered value)
    #[arg(short, long, default_value_t = 1)]
    magnitude: i32,

    /// Clamp the magnitude into the catalog bounds first
    #[arg(long)]
    clamp: bool,
}

impl PriceEffect {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let catalog = config.load_catalog()?;
        let tier = parse_tier(self.tier)?;

        let magnitude = match self.id.parse::<EffectId>() {
            Ok(id) if self.clamp => catalog.clamp_effect_magnitude(id, self.magnitude),
            Ok(_) => self.magnitude,
            Err(e) => {
                tracing::warn!("{}; pricing at 0", e);
                self.magnitude
            }
        };

        let cost = effect_cost_by_key(&catalog, &self.id, tier, magnitude);
        tracing::debug!(effect = %self.id, magnitude, cost, "Priced effect");
        println!("{cost}");
        Ok(())
    }
}

/// Damage kind as accepted on the command line.
#[derive(Clone, Copy, clap::ValueEnum)]
enum DamageArg {
    Auxiliary,
    Single,
    Multi,
}

/// Price a reduction
#[derive(Parser)]
pub struct PriceReduction {
    /// Reduction identifier (e.g. tecnica-demorada)
    #[arg(value_name = "REDUCTION")]
    id: String,

    /// Technique tier (1-7)
    #[arg(short, long)]
    tier: Option<u8>,

    /// Magnitude (level or entered value)
    #[arg(short, long, default_value_t = 1)]
    magnitude: i32,

    /// Delivery type
    #[arg(short, long, value_enum)]
    delivery: Option<DeliveryArg>,

    /// Damage kind
    #[arg(long, value_enum)]
    damage: Option<DamageArg>,

    /// Damage dice (single and multi damage)
    #[arg(long, default_value_t = 0)]
    dice: u16,

    /// Clamp the magnitude into the catalog bounds first
    #[arg(long)]
    clamp: bool,
}

impl PriceReduction {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let catalog = config.load_catalog()?;
        let tier = parse_tier(self.tier)?;

        let damage = self.damage.map(|kind| match kind {
            DamageArg::Auxiliary => DamageSpec::Auxiliary,
            DamageArg::Single => DamageSpec::single(self.dice),
            DamageArg::Multi => DamageSpec::multi(self.dice),
        });
        let context =
            ReductionContext::new(tier, self.delivery.map(Into::into), damage.as_ref());

        let magnitude = match self.id.parse::<ReductionId>() {
            Ok(id) if self.clamp => catalog.clamp_reduction_magnitude(id, self.magnitude),
            Ok(_) => self.magnitude,
            Err(_) => {
                tracing::warn!("unknown reduction identifier `{}`; pricing at 0", self.id);
                self.magnitude
            }
        };

        let cost = reduction_cost_by_key(&catalog, &self.id, &context, magnitude);
        tracing::debug!(reduction = %self.id, magnitude, cost, "Priced reduction");
        println!("{cost}");
        Ok(())
    }
}
