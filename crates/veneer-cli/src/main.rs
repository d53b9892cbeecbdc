//! Veneer CLI
//!
//! Builds member models from class shape files and an exposure config, and
//! prints them for inspection.

mod commands;
mod output;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "veneer")]
#[command(about = "Inspect how native classes are exposed to dynamic views", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print member models
    Inspect {
        /// Class shape file (TOML)
        shapes: PathBuf,
        /// Exposure config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only print this class (qualified name)
        #[arg(long)]
        class: Option<String>,
        /// Print models as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an exposure config
    CheckConfig {
        /// Exposure config (TOML)
        config: PathBuf,
    },
}

/// Log level from `VENEER_LOG`, else from the `-v` count.
fn log_level(verbose: u8) -> Level {
    if let Some(level) = std::env::var("VENEER_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
    {
        return level;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let choice = output::resolve_color_choice(cli.color.as_deref());
    match cli.command {
        Commands::Inspect {
            shapes,
            config,
            class,
            json,
        } => commands::inspect::execute(commands::inspect::InspectOptions {
            shapes,
            config,
            class,
            json,
            color: choice,
        }),
        Commands::CheckConfig { config } => commands::check_config::execute(&config),
    }
}
