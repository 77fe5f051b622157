use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::flush_toasts;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dedupe { input } = cmd {
        let mut wb = open_workbook(cfg, input)?;
        wb.dedupe();
        flush_toasts(wb.notifications_mut().drain());
    }
    Ok(())
}
