//! Provider identities and resolved provider configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Text-generation backend kinds. Exactly one is active per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Managed hosted-model service with a synchronous invoke call (Bedrock).
    #[serde(rename = "bedrock")]
    HostedModelInvoke,
    /// REST chat-completion endpoint (Azure OpenAI).
    #[serde(rename = "azure-openai")]
    ChatCompletion,
    /// REST raw-inference endpoint (Azure AI Foundry).
    #[serde(rename = "azure-ai")]
    RawInference,
    /// Locally running model daemon (Ollama).
    #[default]
    #[serde(rename = "ollama")]
    LocalDaemon,
    /// Generative Language REST API (Gemini).
    #[serde(rename = "gemini")]
    GenerativeLanguage,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::HostedModelInvoke,
        ProviderKind::ChatCompletion,
        ProviderKind::RawInference,
        ProviderKind::LocalDaemon,
        ProviderKind::GenerativeLanguage,
    ];

    /// Stable name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::HostedModelInvoke => "bedrock",
            ProviderKind::ChatCompletion => "azure-openai",
            ProviderKind::RawInference => "azure-ai",
            ProviderKind::LocalDaemon => "ollama",
            ProviderKind::GenerativeLanguage => "gemini",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == normalized)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::InvalidProvider(s.to_string()))
    }
}

/// Fixed sampling policy baked into every request of a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationPolicy {
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

pub const DEFAULT_TEMPERATURE: f32 = 0.2;

pub const HOSTED_MODEL_POLICY: GenerationPolicy =
    GenerationPolicy { temperature: DEFAULT_TEMPERATURE, max_output_tokens: Some(800) };
pub const CHAT_COMPLETION_POLICY: GenerationPolicy =
    GenerationPolicy { temperature: DEFAULT_TEMPERATURE, max_output_tokens: None };
pub const LOCAL_DAEMON_POLICY: GenerationPolicy =
    GenerationPolicy { temperature: DEFAULT_TEMPERATURE, max_output_tokens: None };
pub const GENERATIVE_LANGUAGE_POLICY: GenerationPolicy =
    GenerationPolicy { temperature: DEFAULT_TEMPERATURE, max_output_tokens: Some(100) };

pub const HOSTED_MODEL_ID: &str = "amazon.titan-text-express-v1";
pub const LOCAL_DAEMON_MODEL: &str = "llama3";
pub const GENERATIVE_LANGUAGE_MODEL: &str = "gemini-1.5-pro";
pub const CHAT_COMPLETION_API_VERSION: &str = "2023-07-01-preview";

pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_LOCAL_DAEMON_URL: &str = "http://localhost:11434";

/// Resolved backend identity plus what is needed to reach it.
#[derive(Clone, PartialEq)]
pub enum ProviderConfig {
    HostedModelInvoke { region: String },
    ChatCompletion { endpoint: Url, api_key: String, deployment: String },
    RawInference { endpoint: Url, token: String },
    LocalDaemon { base_url: Url },
    GenerativeLanguage { api_key: String },
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::HostedModelInvoke { .. } => ProviderKind::HostedModelInvoke,
            ProviderConfig::ChatCompletion { .. } => ProviderKind::ChatCompletion,
            ProviderConfig::RawInference { .. } => ProviderKind::RawInference,
            ProviderConfig::LocalDaemon { .. } => ProviderKind::LocalDaemon,
            ProviderConfig::GenerativeLanguage { .. } => ProviderKind::GenerativeLanguage,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::HostedModelInvoke { region } => {
                f.debug_struct("HostedModelInvoke").field("region", region).finish()
            }
            ProviderConfig::ChatCompletion { endpoint, deployment, .. } => f
                .debug_struct("ChatCompletion")
                .field("endpoint", &endpoint.as_str())
                .field("deployment", deployment)
                .field("api_key", &"[REDACTED]")
                .finish(),
            ProviderConfig::RawInference { endpoint, .. } => f
                .debug_struct("RawInference")
                .field("endpoint", &endpoint.as_str())
                .field("token", &"[REDACTED]")
                .finish(),
            ProviderConfig::LocalDaemon { base_url } => {
                f.debug_struct("LocalDaemon").field("base_url", &base_url.as_str()).finish()
            }
            ProviderConfig::GenerativeLanguage { .. } => {
                f.debug_struct("GenerativeLanguage").field("api_key", &"[REDACTED]").finish()
            }
        }
    }
}
