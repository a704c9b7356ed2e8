//! tsvalidator library root.
//!
//! Two stages run in sequence for every file:
//! 1. [`parser`] normalizes headers and turns CSV rows into [`models::TimesheetRecord`]s;
//! 2. [`rules`] runs the business checks and returns a [`models::ValidationResult`].
//!
//! ```no_run
//! let records = tsvalidator::parser::parse("id,status\nE1,Approved\n")?;
//! let result = tsvalidator::rules::validate(&records);
//! assert!(!result.is_valid);
//! # Ok::<(), tsvalidator::errors::AppError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod parser;
pub mod rules;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

pub use models::{Finding, Severity, Status, TimesheetRecord, ValidationResult};
pub use parser::parse;
pub use rules::{Validator, validate};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the configuration once (custom path from --config-file)
    let cfg_path = cli
        .config_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&cfg_path)?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
