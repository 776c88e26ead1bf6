//! Text-generation backend port definition.

use crate::domain::{AppError, ProviderConfig, ProviderKind};

/// Port for a single text-generation backend.
pub trait GenerationClient {
    /// Backend this client talks to.
    fn kind(&self) -> ProviderKind;

    /// Submit a rendered prompt and return the generated text.
    fn invoke(&self, prompt: &str) -> Result<String, AppError>;
}

/// Builds the client for a resolved provider configuration.
pub trait ClientFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn GenerationClient>, AppError>;
}
