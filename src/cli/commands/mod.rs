pub mod config;
pub mod dedupe;
pub mod enrich;
pub mod export;
pub mod init;
pub mod list;
pub mod shell;

use crate::config::Config;
use crate::core::Workbook;
use crate::core::notify::Notifications;
use crate::errors::AppResult;
use crate::import::read_records;
use crate::utils::path::expand_tilde;

/// Empty workbook wired to the configured logo services and toast duration.
pub(crate) fn new_workbook(cfg: &Config) -> Workbook {
    Workbook::with_settings(
        cfg.logo_services(),
        Notifications::with_duration(cfg.toast_duration_ms),
    )
}

/// Workbook holding the rows of `input`.
pub(crate) fn open_workbook(cfg: &Config, input: &str) -> AppResult<Workbook> {
    let mut wb = new_workbook(cfg);
    let records = read_records(&expand_tilde(input))?;
    wb.import_records(records);
    Ok(wb)
}
