//! Replay a command script through the runtime.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use technique_content::ScriptLoader;
use technique_core::{Advisory, Balance, TechniqueSummary};
use technique_runtime::{BuilderEvent, Runtime, RuntimeConfig};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::config::ClientConfig;

/// Replay a RON command script
#[derive(Parser)]
pub struct Run {
    /// Script file (RON list of commands)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Technique name shown on the sheet
    #[arg(short, long, default_value = "Nome da Técnica")]
    name: String,

    /// Print a JSON report instead of the text sheet
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    summary: TechniqueSummary,
    balance: Balance,
    advisories: Vec<Advisory>,
}

impl Run {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let commands = ScriptLoader::load(&self.script)?;
        // Room for one event per command.
        let defaults = RuntimeConfig::default();
        let runtime_config = RuntimeConfig {
            builder_config: config.load_builder_config()?,
            event_buffer_size: commands.len().max(defaults.event_buffer_size),
        };
        let runtime = Runtime::builder()
            .config(runtime_config)
            .catalog(config.load_catalog()?)
            .build();

        let handle = runtime.handle();
        let mut events = handle.subscribe();

        tracing::info!("Replaying {} commands from {}", commands.len(), self.script.display());
        let balance = handle
            .execute_all(commands)
            .context("Failed to replay command script")?;

        let recalculations = count_recalculations(&mut events);
        tracing::info!(recalculations, "Script replayed");

        let report = Report {
            summary: handle.summary(self.name)?,
            balance,
            advisories: handle.advisories()?,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", report.summary);
        for advisory in &report.advisories {
            println!("! {advisory}");
        }
        Ok(())
    }
}

/// Drains pending events, counting recalculations. Lagged gaps are skipped.
fn count_recalculations(events: &mut broadcast::Receiver<BuilderEvent>) -> usize {
    let mut recalculations = 0;
    loop {
        match events.try_recv() {
            Ok(BuilderEvent::Recalculated { .. }) => recalculations += 1,
            Ok(_) => {}
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event receiver lagged");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    recalculations
}
