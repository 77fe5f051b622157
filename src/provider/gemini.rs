//! Google Gemini `generateContent` provider.

use super::Enricher;
use crate::config::Config;
use crate::models::EnrichmentResult;
use serde_json::{Value, json};
use std::time::Duration;

pub struct GeminiEnricher {
    agent: ureq::Agent,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiEnricher {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(concat!("leadgrid/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Endpoint from `api_base_url` + `model`, key from the env var named by `api_key_env`.
    pub fn from_config(cfg: &Config) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            cfg.api_base_url.trim_end_matches('/'),
            cfg.model
        );
        let api_key = std::env::var(&cfg.api_key_env).ok();
        let timeout = Duration::from_secs(cfg.request_timeout_secs.max(1));
        Self::new(endpoint, api_key, timeout)
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// JSON body asking for a structured company profile of `query`.
    pub fn request_body(query: &str) -> Value {
        let prompt = format!(
            "Provide professional company details for: {query}.\n\
             1. website: Full URL (https://...)\n\
             2. domain: Clean root domain (e.g., google.com)\n\
             3. linkedin: Company LinkedIn URL\n\
             4. emailStatus: 'Found' or 'Not Met' based on your knowledge of their public presence.\n\
             5. companyName: The company's official name, if known.\n\
             Return as valid JSON."
        );

        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "companyName": { "type": "STRING" },
                        "website": { "type": "STRING" },
                        "domain": { "type": "STRING" },
                        "linkedin": { "type": "STRING" },
                        "emailStatus": {
                            "type": "STRING",
                            "enum": ["Found", "Not Met"],
                            "description": "Choose one: 'Found', 'Not Met'"
                        }
                    },
                    "required": ["website", "domain", "linkedin", "emailStatus"]
                }
            }
        })
    }

    /// Pull the structured answer out of a `generateContent` response.
    pub fn parse_response(body: &Value) -> Result<EnrichmentResult, String> {
        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| "response has no candidate text".to_string())?;

        let cleaned = strip_code_fence(text);
        serde_json::from_str(cleaned).map_err(|e| format!("malformed enrichment JSON: {e}"))
    }
}

impl Enricher for GeminiEnricher {
    fn enrich(&self, query: &str) -> Option<EnrichmentResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("no API key configured, enrichment skipped");
            return None;
        };

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .set("x-goog-api-key", api_key)
            .send_json(Self::request_body(query));

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(query, error = %classify_ureq_error(&e), "enrichment request failed");
                return None;
            }
        };

        let body: Value = match response.into_json() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(query, error = %e, "enrichment response is not JSON");
                return None;
            }
        };

        match Self::parse_response(&body) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(query, error = %e, "enrichment response rejected");
                None
            }
        }
    }
}

/// Models sometimes wrap JSON in ```json fences despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn classify_ureq_error(err: &ureq::Error) -> String {
    match err {
        ureq::Error::Status(status, _) => format!("http_{status}"),
        ureq::Error::Transport(transport) => {
            let lower = transport.to_string().to_ascii_lowercase();
            if lower.contains("timed out") || lower.contains("timeout") {
                "timeout".to_string()
            } else if lower.contains("dns") {
                "dns".to_string()
            } else if lower.contains("tls") || lower.contains("certificate") {
                "tls".to_string()
            } else {
                "transport".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strip_code_fence;

    #[test]
    fn plain_json_is_only_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn json_fence_is_removed() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn bare_fence_is_removed() {
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn unterminated_fence_keeps_body() {
        assert_eq!(strip_code_fence("```json {\"a\":1}"), "{\"a\":1}");
    }
}
