//! Technique builder command line client.
//!
//! This binary is the composition root: it reads configuration from the
//! environment, sets up logging, loads catalog content and dispatches to a
//! subcommand.
//!
//! # Examples
//!
//! ```bash
//! # List every effect with its pricing model
//! technique catalog effects
//!
//! # Price an effect at tier 4
//! technique price effect aumentar-dano --tier 4 --magnitude 3
//!
//! # Replay a command script and print the technique sheet
//! technique run demos/punho-de-fogo.ron
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{CatalogCommand, PriceEffect, PriceReduction, Run};
use config::ClientConfig;

/// Technique builder point calculator
#[derive(Parser)]
#[command(name = "technique")]
#[command(about = "Build techniques and compute their point cost", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List catalog entries
    Catalog(CatalogCommand),

    /// Price a single option
    #[command(subcommand)]
    Price(PriceCommand),

    /// Replay a RON command script
    Run(Run),
}

#[derive(Parser)]
enum PriceCommand {
    /// Price an effect
    Effect(PriceEffect),

    /// Price a reduction
    Reduction(PriceReduction),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    let _guard = logging::setup_logging(&config.session_id, config.log_stderr)?;

    match cli.command {
        Command::Catalog(cmd) => cmd.execute(&config),
        Command::Price(price) => match price {
            PriceCommand::Effect(cmd) => cmd.execute(&config),
            PriceCommand::Reduction(cmd) => cmd.execute(&config),
        },
        Command::Run(cmd) => cmd.execute(&config),
    }
}
