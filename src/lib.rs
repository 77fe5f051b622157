//! leadgrid library root.
//! Exposes the CLI parser, the high-level run() function and the workbook core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod provider;
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
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &cli.config_path())
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Enrich { .. } => cli::commands::enrich::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Dedupe { .. } => cli::commands::dedupe::handle(&cli.command, cfg),
        Commands::Shell { .. } => cli::commands::shell::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (file mancante → default)
    let cfg = Config::load_from(&cli.config_path())?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
