//! Offline provider backed by a JSON file of canned answers:
//!
//! ```json
//! { "Acme": { "website": "https://acme.com", "domain": "acme.com",
//!             "linkedin": "https://linkedin.com/company/acme", "emailStatus": "Found" } }
//! ```

use super::Enricher;
use crate::errors::{AppError, AppResult};
use crate::models::EnrichmentResult;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct FixtureEnricher {
    answers: HashMap<String, EnrichmentResult>,
}

impl FixtureEnricher {
    pub fn new(answers: HashMap<String, EnrichmentResult>) -> Self {
        Self { answers }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Provider(format!("cannot read fixtures {}: {e}", path.display()))
        })?;
        let answers: HashMap<String, EnrichmentResult> = serde_json::from_str(&content)
            .map_err(|e| AppError::Provider(format!("invalid fixtures {}: {e}", path.display())))?;
        Ok(Self::new(answers))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Enricher for FixtureEnricher {
    /// Exact key first, then a case-insensitive match.
    fn enrich(&self, query: &str) -> Option<EnrichmentResult> {
        if let Some(hit) = self.answers.get(query) {
            return Some(hit.clone());
        }
        let lower = query.to_lowercase();
        self.answers
            .iter()
            .find(|(k, _)| k.to_lowercase() == lower)
            .map(|(_, v)| v.clone())
    }
}
