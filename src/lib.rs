//! rAttendance library root.
//! Exposes the attendance ledger, the admin session around it, exports,
//! configuration and the CLI parser with its high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Shell => cli::commands::shell::handle(cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg_path = Config::resolve_path(cli.config.as_deref());

    // `init` must work even when the current file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&cfg_path)?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}
