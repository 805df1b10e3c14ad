//! trep library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod session;
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
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Show { .. }
        | Commands::View { .. }
        | Commands::Next
        | Commands::Prev
        | Commands::Today => cli::commands::show::handle(&cli.command, cfg),
        Commands::Punch => cli::commands::punch::handle(cfg),
        Commands::Edit { .. } | Commands::Del { .. } => {
            cli::commands::edit::handle(&cli.command, cfg)
        }
        Commands::Open { .. } | Commands::Save { .. } => {
            cli::commands::file::handle(&cli.command, cfg, cli.test)
        }
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; command-line overrides take precedence over it.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_session) = &cli.session {
        cfg.session_file = custom_session.clone();
    }

    dispatch(&cli, &cfg)
}
