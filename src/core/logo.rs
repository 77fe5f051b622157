//! Company logo URLs.
//!
//! `website_domain` is the single place where a website is reduced to the host
//! used by the logo services; save, enrichment merge, import and the display
//! fallback chain all go through it.

use crate::utils::encode_uri_component;
use serde::{Deserialize, Serialize};

/// Base URLs of the three image services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoServices {
    pub logo_service_url: String,
    pub favicon_service_url: String,
    pub avatar_service_url: String,
}

impl Default for LogoServices {
    fn default() -> Self {
        Self {
            logo_service_url: "https://logo.clearbit.com".to_string(),
            favicon_service_url: "https://www.google.com/s2/favicons".to_string(),
            avatar_service_url: "https://ui-avatars.com/api/".to_string(),
        }
    }
}

/// Which fallback tier produced a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoTier {
    Explicit,
    LogoService,
    Favicon,
    Avatar,
}

impl LogoTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoTier::Explicit => "explicit",
            LogoTier::LogoService => "logo-service",
            LogoTier::Favicon => "favicon",
            LogoTier::Avatar => "avatar",
        }
    }
}

/// Strip a leading `http://` / `https://` and keep everything before the first `/`.
///
/// `"https://acme.com/about"` → `Some("acme.com")`, `""` → `None`.
pub fn website_domain(website: &str) -> Option<String> {
    let trimmed = website.trim();
    let lower = trimmed.to_ascii_lowercase();
    let rest = if lower.starts_with("https://") {
        &trimmed[8..]
    } else if lower.starts_with("http://") {
        &trimmed[7..]
    } else {
        trimmed
    };

    let domain = rest.split('/').next().unwrap_or("");
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

impl LogoServices {
    /// Logo-service URL for a domain (a full website is normalized first).
    pub fn logo_url(&self, domain_or_website: &str) -> Option<String> {
        website_domain(domain_or_website).map(|d| {
            format!("{}/{}", self.logo_service_url.trim_end_matches('/'), d)
        })
    }

    pub fn favicon_url(&self, domain: &str) -> String {
        format!("{}?domain={}&sz=128", self.favicon_service_url, domain)
    }

    pub fn avatar_url(&self, name: &str) -> String {
        let name = if name.trim().is_empty() { "Company" } else { name };
        format!(
            "{}?name={}&background=random&color=fff&size=128",
            self.avatar_service_url,
            encode_uri_component(name)
        )
    }

    /// Candidate image URLs in the order a renderer should try them.
    ///
    /// The last entry is always the initials avatar, so the chain is never empty.
    pub fn fallback_chain(
        &self,
        name: &str,
        logo: Option<&str>,
        website: &str,
    ) -> Vec<(LogoTier, String)> {
        let mut chain = Vec::new();
        let domain = website_domain(website);

        match (logo.filter(|l| !l.trim().is_empty()), domain.as_deref()) {
            (Some(explicit), _) => chain.push((LogoTier::Explicit, explicit.to_string())),
            (None, Some(d)) => {
                if let Some(url) = self.logo_url(d) {
                    chain.push((LogoTier::LogoService, url));
                }
            }
            (None, None) => {}
        }

        if let Some(d) = domain.as_deref() {
            chain.push((LogoTier::Favicon, self.favicon_url(d)));
        }

        chain.push((LogoTier::Avatar, self.avatar_url(name)));
        chain
    }
}
