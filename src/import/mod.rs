//! Import of prospect rows from CSV or JSON files.
//!
//! Columns use the camelCase record keys. Every column is optional; an `id`
//! column is ignored because the workbook assigns its own ids.

use crate::errors::{AppError, AppResult};
use crate::models::{EmailStatus, Record};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ImportRow {
    imported_data: String,
    last_updated: String,
    company_name: String,
    company_website: String,
    linkedin_url: String,
    company_logo: Option<String>,
    email_waterfall: String,
}

impl ImportRow {
    fn into_record(self, line: usize) -> AppResult<Record> {
        let status = EmailStatus::from_label(&self.email_waterfall).ok_or_else(|| {
            AppError::InvalidStatus(format!("'{}' (row {line})", self.email_waterfall))
        })?;

        Ok(Record {
            id: 0,
            imported_data: self.imported_data,
            last_updated: self.last_updated,
            company_name: self.company_name,
            company_website: self.company_website,
            linkedin_url: self.linkedin_url,
            company_logo: self.company_logo.filter(|l| !l.trim().is_empty()),
            email_waterfall: status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// `.json` → JSON, anything else → CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ImportFormat::Json,
            _ => ImportFormat::Csv,
        }
    }
}

/// Read rows from `path` (format chosen by extension). Returned records carry id 0.
pub fn read_records(path: &Path) -> AppResult<Vec<Record>> {
    if !path.exists() {
        return Err(AppError::Import(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    let rows = match ImportFormat::from_path(path) {
        ImportFormat::Json => read_json(path)?,
        ImportFormat::Csv => read_csv(path)?,
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record(i + 1))
        .collect::<AppResult<Vec<_>>>()?;

    tracing::info!(path = %path.display(), count = records.len(), "input read");
    Ok(records)
}

/// Parse rows from CSV text (header line required).
pub fn parse_csv(content: &str) -> AppResult<Vec<Record>> {
    csv_rows(content.as_bytes())?
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record(i + 1))
        .collect()
}

fn read_csv(path: &Path) -> AppResult<Vec<ImportRow>> {
    let file = std::fs::File::open(path)?;
    csv_rows(file)
}

fn csv_rows<R: Read>(reader: R) -> AppResult<Vec<ImportRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for row in rdr.deserialize::<ImportRow>() {
        out.push(row?);
    }
    Ok(out)
}

fn read_json(path: &Path) -> AppResult<Vec<ImportRow>> {
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<ImportRow> = serde_json::from_str(&content)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;
    Ok(rows)
}
