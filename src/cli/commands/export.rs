use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        view,
        force,
    } = cmd
    {
        let mut wb = open_workbook(cfg, input)?;
        wb.set_query(view.to_query());
        ExportLogic::export(&wb.display_rows(), *format, file, *force)?;
    }
    Ok(())
}
