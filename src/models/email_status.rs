use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Outcome of the email-discovery waterfall for a record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum EmailStatus {
    #[serde(rename = "Found")]
    Found,
    #[serde(rename = "Not Met")]
    NotMet,
    #[serde(rename = "Pending")]
    Pending,
    #[default]
    #[serde(rename = "None")]
    None,
}

impl EmailStatus {
    pub const ALL: [EmailStatus; 4] = [
        EmailStatus::Found,
        EmailStatus::NotMet,
        EmailStatus::Pending,
        EmailStatus::None,
    ];

    /// Display / serialization label.
    pub fn label(&self) -> &'static str {
        match self {
            EmailStatus::Found => "Found",
            EmailStatus::NotMet => "Not Met",
            EmailStatus::Pending => "Pending",
            EmailStatus::None => "None",
        }
    }

    /// Parse a label ("Not Met") or a CLI code ("not-met"), case-insensitive.
    /// An empty string maps to the default status.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "found" => Some(Self::Found),
            "not met" | "not-met" | "notmet" => Some(Self::NotMet),
            "pending" => Some(Self::Pending),
            "none" | "" => Some(Self::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
