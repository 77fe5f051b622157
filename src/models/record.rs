use super::{EmailStatus, RecordField, RecordId};
use serde::{Deserialize, Serialize};

/// One prospect row of the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub imported_data: String,
    pub last_updated: String,
    pub company_name: String,
    pub company_website: String,
    pub linkedin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub email_waterfall: EmailStatus,
}

impl Record {
    /// Label used for freshly added rows.
    pub const NEW_PROSPECT: &'static str = "New Prospect";

    pub fn new(id: RecordId, imported_data: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            id,
            imported_data: imported_data.into(),
            last_updated: last_updated.into(),
            company_name: String::new(),
            company_website: String::new(),
            linkedin_url: String::new(),
            company_logo: None,
            email_waterfall: EmailStatus::None,
        }
    }

    /// Display value of a column; a missing logo reads as "".
    pub fn field_value(&self, field: RecordField) -> &str {
        match field {
            RecordField::ImportedData => &self.imported_data,
            RecordField::LastUpdated => &self.last_updated,
            RecordField::CompanyName => &self.company_name,
            RecordField::CompanyWebsite => &self.company_website,
            RecordField::LinkedinUrl => &self.linkedin_url,
            RecordField::CompanyLogo => self.company_logo.as_deref().unwrap_or(""),
            RecordField::EmailWaterfall => self.email_waterfall.label(),
        }
    }

    /// The four free-text columns covered by the search box.
    pub fn searchable_values(&self) -> [&str; 4] {
        [
            &self.imported_data,
            &self.company_name,
            &self.company_website,
            &self.linkedin_url,
        ]
    }

    /// Lookup string sent to the enrichment provider: company name first,
    /// then the imported label. `None` when both are blank.
    pub fn enrichment_query(&self) -> Option<&str> {
        if !self.company_name.is_empty() {
            Some(&self.company_name)
        } else if !self.imported_data.is_empty() {
            Some(&self.imported_data)
        } else {
            None
        }
    }

    /// Key used to spot potential duplicates.
    pub fn dedupe_key(&self) -> &str {
        if self.company_name.is_empty() {
            &self.imported_data
        } else {
            &self.company_name
        }
    }
}
