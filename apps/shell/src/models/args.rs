//! # CLI Argument Definitions
//!
//! Subcommands, arguments, and flags of the `motif` binary, declared with `clap` derive.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "motif")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Walk through the builder, factory and singleton patterns")]
pub struct Cli {
    /// Configuration file (defaults to ./motif.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Configure a car step by step and print its description
    Build(CarArgs),
    /// Configure a person through a chained builder and print it
    Person(PersonArgs),
    /// Create cars by name through the factory registry and drive them
    Drive {
        /// Car names (e.g. 'RaceCar'); defaults to `factory.discriminators` from config
        names: Vec<String>,
    },
    /// List the names the factory registry knows
    List {},
    /// Show that only one singleton may be alive at a time
    Singleton {},
}

/// Fields left out keep their defaults.
#[derive(Debug, Args)]
pub struct CarArgs {
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Debug, Args)]
pub struct PersonArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long)]
    pub address: Option<String>,
}
