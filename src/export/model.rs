// src/export/model.rs

use crate::models::Record;
use serde::Serialize;

/// Flat row written by every export format; a missing logo is an empty string.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordExport {
    pub id: u64,
    pub imported_data: String,
    pub last_updated: String,
    pub company_name: String,
    pub company_website: String,
    pub linkedin_url: String,
    pub email_waterfall: String,
    pub company_logo: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            id: r.id,
            imported_data: r.imported_data.clone(),
            last_updated: r.last_updated.clone(),
            company_name: r.company_name.clone(),
            company_website: r.company_website.clone(),
            linkedin_url: r.linkedin_url.clone(),
            email_waterfall: r.email_waterfall.label().to_string(),
            company_logo: r.company_logo.clone().unwrap_or_default(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "importedData",
        "lastUpdated",
        "companyName",
        "companyWebsite",
        "linkedinUrl",
        "emailWaterfall",
        "companyLogo",
    ]
}

/// Convert a record into string cells, in header order.
pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.imported_data.clone(),
        e.last_updated.clone(),
        e.company_name.clone(),
        e.company_website.clone(),
        e.linkedin_url.clone(),
        e.email_waterfall.clone(),
        e.company_logo.clone(),
    ]
}
