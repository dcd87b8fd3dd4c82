//! List catalog entries.

use anyhow::Result;
use clap::Parser;
use technique_core::Catalog;

use crate::config::ClientConfig;

/// List catalog entries
#[derive(Parser)]
pub struct CatalogCommand {
    /// Section to list (all sections when omitted)
    #[arg(value_enum)]
    section: Option<Section>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Section {
    Tiers,
    Effects,
    Reductions,
    Conditions,
}

impl CatalogCommand {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let catalog = config.load_catalog()?;
        let wants = |section: Section| self.section.is_none_or(|selected| selected == section);

        if wants(Section::Tiers) {
            print_tiers(&catalog);
        }
        if wants(Section::Effects) {
            print_effects(&catalog);
        }
        if wants(Section::Reductions) {
            print_reductions(&catalog);
        }
        if wants(Section::Conditions) {
            print_conditions(&catalog);
        }
        Ok(())
    }
}

fn print_tiers(catalog: &Catalog) {
    println!("Graus");
    for profile in catalog.tiers.iter() {
        println!(
            "  {}  {:>2} pts  {:>2} dados  {}",
            profile.tier, profile.max_points, profile.max_dice, profile.description
        );
    }
}

fn print_effects(catalog: &Catalog) {
    println!("Efeitos");
    for effect in catalog.effects.iter() {
        let max = effect
            .bounds
            .map(|bounds| format!(" (máx. {})", bounds.max))
            .unwrap_or_default();
        println!("  {:<28} {}{}  {:?}", effect.id, effect.label, max, effect.pricing);
    }
}

fn print_reductions(catalog: &Catalog) {
    println!("Reduções");
    for reduction in catalog.reductions.iter() {
        println!(
            "  {:<24} {}  {:?}",
            reduction.id, reduction.label, reduction.pricing
        );
    }
}

fn print_conditions(catalog: &Catalog) {
    println!("Condições");
    for condition in catalog.conditions.iter() {
        println!("  {:<16} {}  {} pts", condition.id, condition.label, condition.cost);
    }
}
