//! Enrichment providers: the remote lookup behind the enrichment workflow.

mod fixture;
mod gemini;

pub use fixture::FixtureEnricher;
pub use gemini::GeminiEnricher;

use crate::config::{Config, ProviderKind};
use crate::errors::{AppError, AppResult};
use crate::models::EnrichmentResult;
use crate::utils::path::expand_tilde;

/// A company lookup. Any failure (missing credentials, transport error,
/// malformed answer) is reported as `None`; callers treat it as "no update".
pub trait Enricher {
    fn enrich(&self, query: &str) -> Option<EnrichmentResult>;
}

impl<T: Enricher + ?Sized> Enricher for &T {
    fn enrich(&self, query: &str) -> Option<EnrichmentResult> {
        (**self).enrich(query)
    }
}

/// Build the provider selected by the configuration. An explicit fixtures
/// file always wins over the configured provider.
pub fn build_enricher(cfg: &Config, fixtures: Option<&str>) -> AppResult<Box<dyn Enricher>> {
    if let Some(path) = fixtures {
        return Ok(Box::new(load_fixtures(path)?));
    }

    match cfg.provider {
        ProviderKind::Gemini => {
            let gemini = GeminiEnricher::from_config(cfg);
            if !gemini.has_credentials() {
                tracing::warn!(env = %cfg.api_key_env, "API key variable is unset, records will not be enriched");
            }
            tracing::debug!(endpoint = gemini.endpoint(), "gemini provider ready");
            Ok(Box::new(gemini))
        }
        ProviderKind::Fixture => {
            let path = cfg.fixtures.as_deref().ok_or_else(|| {
                AppError::Provider("provider 'fixture' requires the 'fixtures' setting".into())
            })?;
            Ok(Box::new(load_fixtures(path)?))
        }
    }
}

fn load_fixtures(path: &str) -> AppResult<FixtureEnricher> {
    let fixtures = FixtureEnricher::from_file(&expand_tilde(path))?;
    if fixtures.is_empty() {
        tracing::warn!(path, "fixtures file has no answers");
    }
    tracing::debug!(answers = fixtures.len(), "fixture provider ready");
    Ok(fixtures)
}
