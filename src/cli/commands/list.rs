use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::grid::print_grid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { input, view } = cmd {
        let mut wb = open_workbook(cfg, input)?;
        wb.set_query(view.to_query());
        print_grid(&wb);
    }
    Ok(())
}
