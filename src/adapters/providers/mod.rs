//! HTTP adapters, one per provider kind.

pub mod aws_credentials;
pub mod azure_ai;
pub mod azure_openai;
pub mod bedrock;
pub mod gemini;
pub mod http;
pub mod ollama;

use std::time::Duration;

use tracing::debug;

use crate::domain::{AppError, ProviderConfig};
use crate::ports::{ClientFactory, EnvSource, GenerationClient};

pub use azure_ai::AzureAiClient;
pub use azure_openai::AzureOpenAiClient;
pub use bedrock::BedrockClient;
pub use gemini::GeminiClient;
pub use ollama::OllamaClient;

/// Builds the blocking HTTP client matching a resolved configuration.
#[derive(Debug, Clone)]
pub struct HttpClientFactory<E> {
    env: E,
    timeout: Duration,
}

impl<E: EnvSource> HttpClientFactory<E> {
    pub fn new(env: E, timeout: Duration) -> Self {
        Self { env, timeout }
    }
}

impl<E: EnvSource> ClientFactory for HttpClientFactory<E> {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn GenerationClient>, AppError> {
        debug!(provider = %config.kind(), timeout_secs = self.timeout.as_secs(), "building client");

        let client: Box<dyn GenerationClient> = match config {
            ProviderConfig::HostedModelInvoke { region } => {
                let auth = aws_credentials::discover(&self.env, region)?;
                Box::new(BedrockClient::new(region, auth, self.timeout)?)
            }
            ProviderConfig::ChatCompletion { endpoint, api_key, deployment } => Box::new(
                AzureOpenAiClient::new(endpoint, api_key.clone(), deployment, self.timeout)?,
            ),
            ProviderConfig::RawInference { endpoint, token } => {
                Box::new(AzureAiClient::new(endpoint.clone(), token.clone(), self.timeout)?)
            }
            ProviderConfig::LocalDaemon { base_url } => {
                Box::new(OllamaClient::new(base_url, self.timeout)?)
            }
            ProviderConfig::GenerativeLanguage { api_key } => {
                Box::new(GeminiClient::new(api_key.clone(), self.timeout)?)
            }
        };

        Ok(client)
    }
}
