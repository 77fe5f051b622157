use super::EmailStatus;
use serde::{Deserialize, Serialize};

/// Company metadata returned by an enrichment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub website: String,
    pub domain: String,
    pub linkedin: String,
    pub email_status: EmailStatus,
}
