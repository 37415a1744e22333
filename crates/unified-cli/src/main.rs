// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — unified-force binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unified Force - interactive simulator and one-shot scenario runner.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use unified_cli::render::{write_result, write_store};
use unified_cli::shell::Shell;
use unified_core::simulator::Simulator;
use unified_types::config::SimulatorConfig;

#[derive(Parser, Debug)]
#[command(name = "unified-force", version)]
#[command(about = "Unified force / frequency calculator with an editable state parameter table")]
struct Cli {
    /// JSON file with state property overrides and default scenario inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Shell,
    /// Evaluate one scenario and print the results
    Simulate {
        /// Comma-separated states, e.g. solid,gas
        #[arg(long, value_delimiter = ',')]
        states: Option<Vec<String>>,
        #[arg(long, allow_negative_numbers = true)]
        meters: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        seconds: Option<f64>,
        /// Fibonacci / prime index
        #[arg(short, long, allow_negative_numbers = true)]
        n: Option<i64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every state's properties
    Show {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimulatorConfig> {
    match path {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            SimulatorConfig::from_file(&path.to_string_lossy())
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(SimulatorConfig::default()),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let simulator = Simulator::new(config.build_store()?);
    let stdout = io::stdout();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(simulator, stdin.lock(), stdout.lock());
            shell.run()?;
        }
        Command::Simulate {
            states,
            meters,
            seconds,
            n,
            json,
        } => {
            let defaults = config.scenario;
            let states = states.unwrap_or(defaults.states);
            let result = simulator.simulate_scenario(
                &states,
                meters.unwrap_or(defaults.meters),
                seconds.unwrap_or(defaults.seconds),
                n.unwrap_or(defaults.n),
            )?;
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &result)?;
                writeln!(out)?;
            } else {
                write_result(&mut out, &result)?;
            }
        }
        Command::Show { json } => {
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, simulator.store())?;
                writeln!(out)?;
            } else {
                write_store(&mut out, simulator.store())?;
            }
        }
    }
    Ok(())
}

fn main() {
    unified_cli::init_logging();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
