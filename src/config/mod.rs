use crate::core::logo::LogoServices;
use crate::core::notify::DEFAULT_TOAST_DURATION_MS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub fixtures: Option<String>,
    #[serde(default = "default_logo_service_url")]
    pub logo_service_url: String,
    #[serde(default = "default_favicon_service_url")]
    pub favicon_service_url: String,
    #[serde(default = "default_avatar_service_url")]
    pub avatar_service_url: String,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Gemini
}
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_api_key_env() -> String {
    "API_KEY".to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_logo_service_url() -> String {
    LogoServices::default().logo_service_url
}
fn default_favicon_service_url() -> String {
    LogoServices::default().favicon_service_url
}
fn default_avatar_service_url() -> String {
    LogoServices::default().avatar_service_url
}
fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: default_request_timeout_secs(),
            fixtures: None,
            logo_service_url: default_logo_service_url(),
            favicon_service_url: default_favicon_service_url(),
            avatar_service_url: default_avatar_service_url(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.leadgrid`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadgrid")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leadgrid.conf")
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Logo service URLs used when deriving `companyLogo`.
    pub fn logo_services(&self) -> LogoServices {
        LogoServices {
            logo_service_url: self.logo_service_url.clone(),
            favicon_service_url: self.favicon_service_url.clone(),
            avatar_service_url: self.avatar_service_url.clone(),
        }
    }

    /// Keys every complete config file carries.
    pub fn known_keys() -> &'static [&'static str] {
        &[
            "provider",
            "model",
            "api_base_url",
            "api_key_env",
            "request_timeout_secs",
            "fixtures",
            "logo_service_url",
            "favicon_service_url",
            "avatar_service_url",
            "toast_duration_ms",
        ]
    }
}
