//! sign-compare
//!
//! Record signs (a signifier plus free-text features), edit their features,
//! and compare two signs by Dice coefficient and Jaccard index.
//!
//! # Commands
//!
//! - `list`: every saved sign
//! - `new <name>`: save a new, featureless sign
//! - `show <name>`: features of one sign
//! - `add <sign> <input>`: add a feature, or merge `other.txt` / `other.sign`
//! - `remove <sign> <feature>`: remove one feature
//! - `compare <a> <b>`: Dice coefficient and Jaccard index
//! - `rank <name>`: every other sign, most similar first
//!
//! Exit codes: 0 success, 1 recoverable error, 2 configuration error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sign_core::config::{CliOverrides, SignConfig};
use sign_core::SignErrorCode;

mod app;
mod commands;
mod error;
mod output;

use app::App;
use error::CliExitCode;

#[derive(Parser)]
#[command(name = "sign-compare")]
#[command(version)]
#[command(about = "Record linguistic signs and compare their features")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Storage directory holding one `<name>.txt` record per sign
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every saved sign
    List,
    /// Save a new sign with no features
    New { name: String },
    /// Show the features of a sign
    Show { name: String },
    /// Add a feature, or merge another sign via `<name>.txt` / `<name>.sign`
    Add { sign: String, input: String },
    /// Remove the first occurrence of a feature
    Remove { sign: String, feature: String },
    /// Compare two signs
    Compare { left: String, right: String },
    /// Rank every other sign by similarity to one sign
    Rank { name: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    sign_core::tracing::init_tracing_with_filter(directive);

    let overrides = CliOverrides {
        storage_dir: cli.dir.as_ref().map(|d| d.display().to_string()),
        json: cli.json,
    };
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match SignConfig::load(&root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return CliExitCode::Config.into();
        }
    };

    let app = App::new(&config);
    tracing::debug!(storage = %app.store.root().display(), "sign-compare started");

    match commands::dispatch(&app, cli.command) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            eprintln!("{}", e.coded_string());
            CliExitCode::from(&e).into()
        }
    }
}
