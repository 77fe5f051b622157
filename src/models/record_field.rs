use clap::ValueEnum;

/// Columns of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RecordField {
    ImportedData,
    LastUpdated,
    CompanyName,
    CompanyWebsite,
    LinkedinUrl,
    CompanyLogo,
    EmailWaterfall,
}

impl RecordField {
    /// camelCase key, as used by import/export headers.
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::ImportedData => "importedData",
            RecordField::LastUpdated => "lastUpdated",
            RecordField::CompanyName => "companyName",
            RecordField::CompanyWebsite => "companyWebsite",
            RecordField::LinkedinUrl => "linkedinUrl",
            RecordField::CompanyLogo => "companyLogo",
            RecordField::EmailWaterfall => "emailWaterfall",
        }
    }

    /// Column title shown in the grid.
    pub fn title(&self) -> &'static str {
        match self {
            RecordField::ImportedData => "Imported Data",
            RecordField::LastUpdated => "Last Updated",
            RecordField::CompanyName => "Company Name",
            RecordField::CompanyWebsite => "Website URL",
            RecordField::LinkedinUrl => "LinkedIn URL",
            RecordField::CompanyLogo => "Logo",
            RecordField::EmailWaterfall => "Email Waterfall",
        }
    }

    /// Accepts the camelCase key ("companyName") or the kebab-case CLI name
    /// ("company-name"), case-insensitive.
    pub fn from_key(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match norm.as_str() {
            "importeddata" => Some(Self::ImportedData),
            "lastupdated" => Some(Self::LastUpdated),
            "companyname" | "name" => Some(Self::CompanyName),
            "companywebsite" | "website" => Some(Self::CompanyWebsite),
            "linkedinurl" | "linkedin" => Some(Self::LinkedinUrl),
            "companylogo" | "logo" => Some(Self::CompanyLogo),
            "emailwaterfall" | "status" => Some(Self::EmailWaterfall),
            _ => None,
        }
    }

    /// Whether the inline editor may change this column.
    pub fn is_user_editable(&self) -> bool {
        matches!(
            self,
            RecordField::ImportedData
                | RecordField::CompanyName
                | RecordField::CompanyWebsite
                | RecordField::LinkedinUrl
                | RecordField::EmailWaterfall
        )
    }
}
