use crate::cli::commands::{new_workbook, open_workbook};
use crate::cli::parser::Commands;
use crate::cli::shell::run_interactive;
use crate::config::Config;
use crate::errors::AppResult;
use crate::provider::build_enricher;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell { input, fixtures } = cmd {
        let wb = match input {
            Some(path) => open_workbook(cfg, path)?,
            None => new_workbook(cfg),
        };
        let enricher = build_enricher(cfg, fixtures.as_deref())?;
        run_interactive(wb, enricher);
    }
    Ok(())
}
