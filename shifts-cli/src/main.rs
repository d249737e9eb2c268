//! # shifts
//!
//! Command-line viewer for Handswork shift listings.
//!
//! ## Commands
//!
//! - `list`: List shifts near the configured position
//! - `show`: Show the details of one shift
//!
//! ## Example
//!
//! ```bash
//! # Shifts near the default position
//! shifts list
//!
//! # Somewhere else, scrolled down a few rows
//! shifts --lat 59.9343 --lon 30.3351 list --offset 480 --height 960
//!
//! # One shift
//! shifts show 1001
//!
//! # Demo data, no network
//! shifts --mock list
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shifts_core::Viewport;
use std::path::PathBuf;

mod commands;
mod config;
mod demo;

use commands::{list, show};
use config::{Config, Overrides};

/// Command-line viewer for Handswork shift listings.
#[derive(Parser, Debug)]
#[command(name = "shifts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/shifts.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use canned demo listings instead of the network
    #[arg(long, global = true)]
    mock: bool,

    /// Search latitude
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Search longitude
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Endpoint host
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show the underlying failure instead of a generic message
    #[arg(long, global = true)]
    detailed_errors: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List shifts near the configured position
    List {
        /// Scroll offset from the top of the list
        #[arg(long, default_value = "0")]
        offset: u32,

        /// Viewport height; 0 shows the first page
        #[arg(long, default_value = "0")]
        height: u32,
    },

    /// Show the details of one shift
    Show {
        /// Shift id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose { "debug" } else { "warn" });

    let overrides = Overrides {
        latitude: cli.lat,
        longitude: cli.lon,
        base_url: cli.base_url,
        detailed_errors: cli.detailed_errors,
    };
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&overrides);

    match cli.command {
        Commands::List { offset, height } => {
            list::run(&config, cli.mock, Viewport { offset, height }).await?;
        }
        Commands::Show { id } => {
            show::run(&config, cli.mock, &id).await?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout carries only the listing.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
