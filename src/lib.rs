//! rdaylog library root.
//! Exposes the CLI parser, the high-level run() function and the
//! task-log core (record store, task list, stopwatch, editor).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Load { .. } => cli::commands::load::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::Timer { .. } => cli::commands::timer::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose);

    let mut cfg = Config::load()?;

    // command-line override of the data directory
    if let Some(dir) = &cli.dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
