//! # foodprint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Running without a subcommand performs `update` with default arguments.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use foodprint_cli::reference::{run_list, run_lookup, LookupArgs};
use foodprint_cli::update::{run_update, UpdateArgs};

/// Keeps the CO2 figures of the food catalog in line with the CONCITO
/// Big Climate Database.
#[derive(Parser, Debug)]
#[command(name = "foodprint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Refresh CO2 figures in the catalog (default).
    Update(UpdateArgs),

    /// Show the reference entry a product name resolves to.
    Lookup(LookupArgs),

    /// List all reference products and their aliases.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or_else(|| Commands::Update(UpdateArgs::default())) {
        Commands::Update(args) => run_update(&args),
        Commands::Lookup(args) => run_lookup(&args),
        Commands::List => run_list(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
