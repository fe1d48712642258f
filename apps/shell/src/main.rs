#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{builder, factory, singleton};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use motif::kernel::config::{LoggerSettings, ShellConfig, load_config};
use motif_logger::{LevelFilter, Logger};
use std::io::Write;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ShellConfig = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.logger, cli.verbose)?;
    debug!(features = ?motif::features::ENABLED, "Starting motif shell");

    let mut out = std::io::stdout().lock();

    match cli.command {
        AppCommands::Build(args) => builder::build_car(args, &mut out)?,
        AppCommands::Person(args) => builder::build_person(args, &mut out)?,
        AppCommands::Drive { names } => {
            let names = if names.is_empty() { config.factory.discriminators } else { names };
            factory::drive(&motif::factory::car_registry(), &names, &mut out)?;
        },
        AppCommands::List {} => factory::list(&motif::factory::car_registry(), &mut out)?,
        AppCommands::Singleton {} => {
            singleton::demonstrate(&motif::singleton::GLOBAL_LIMIT, &mut out)?;
        },
    }

    out.flush()?;
    Ok(())
}

fn init_logger(settings: &LoggerSettings, verbose: bool) -> Result<Logger> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        settings
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid logger.level '{}'", settings.level))?
    };

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let logger = match &settings.path {
        Some(path) => builder.path(path).json(settings.json).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}
