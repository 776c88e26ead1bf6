//! Process-wide settings loaded from `infragen.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::provider::DEFAULT_LOCAL_DAEMON_URL;
use crate::domain::{AppError, ProviderKind};

/// Default config file name looked up in the working directory.
pub const SETTINGS_FILE: &str = "infragen.toml";

/// Settings read once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Active provider; falls back to the local daemon when unset everywhere.
    #[serde(default)]
    pub provider: Option<ProviderKind>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Base URL of the local model daemon.
    #[serde(default = "default_ollama_url")]
    pub ollama_url: Url,
    /// Region used when no AWS region variable is set.
    #[serde(default)]
    pub aws_region: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: None,
            timeout_secs: default_timeout(),
            ollama_url: default_ollama_url(),
            aws_region: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.aws_region.as_deref().is_some_and(|region| region.trim().is_empty()) {
            return Err(AppError::InvalidConfig("aws_region must not be empty".to_string()));
        }
        if !matches!(self.ollama_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "ollama_url must use http or https, got '{}'",
                self.ollama_url.scheme()
            )));
        }
        Ok(())
    }

    /// Active provider, or the default local daemon.
    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.unwrap_or_default()
    }
}

/// Parse settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

fn default_timeout() -> u64 {
    60
}

fn default_ollama_url() -> Url {
    Url::parse(DEFAULT_LOCAL_DAEMON_URL).expect("Default daemon URL must be valid")
}
