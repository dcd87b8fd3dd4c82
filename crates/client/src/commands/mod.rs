//! Subcommand implementations.

mod catalog;
mod price;
mod run;

pub use catalog::CatalogCommand;
pub use price::{PriceEffect, PriceReduction};
pub use run::Run;

use anyhow::{Context, Result};
use technique_core::{DeliveryType, Tier};

/// Delivery type as accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum DeliveryArg {
    /// Combat technique (tier-derived discount)
    Combate,
    /// Devil-fruit ability
    Fruta,
}

impl From<DeliveryArg> for DeliveryType {
    fn from(arg: DeliveryArg) -> Self {
        match arg {
            DeliveryArg::Combate => DeliveryType::Combat,
            DeliveryArg::Fruta => DeliveryType::Ability,
        }
    }
}

pub(crate) fn parse_tier(tier: Option<u8>) -> Result<Option<Tier>> {
    tier.map(Tier::new)
        .transpose()
        .context("Invalid --tier")
}
