// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Record;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei record passati, nell'ordine ricevuto.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output
    /// - `force`: sovrascrive senza chiedere conferma
    ///
    /// Returns the number of rows written (0 → nothing written).
    pub fn export(
        records: &[&Record],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let expanded = expand_tilde(file);
        let path = expanded.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if records.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = records.iter().map(|r| RecordExport::from(*r)).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        tracing::info!(format = format.as_str(), rows = rows.len(), path = %path.display(), "export written");
        Ok(rows.len())
    }
}
