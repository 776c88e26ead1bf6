use std::io;

use thiserror::Error;

/// Library-wide error type for infragen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment values for a provider are absent.
    #[error("Missing credentials for {provider}: {} not set", .variables.join(", "))]
    MissingCredential { provider: String, variables: Vec<String> },

    /// A credential is present but unusable (e.g. an endpoint that is not a URL).
    #[error("Invalid value in {variable}: {reason}")]
    InvalidCredential { variable: String, reason: String },

    /// The parameter set does not cover every placeholder of the template.
    #[error("Template '{template}' is missing values for: {}", .placeholders.join(", "))]
    MissingPlaceholder { template: String, placeholders: Vec<String> },

    /// A parameter was supplied that the template does not declare.
    #[error("Template '{template}' does not declare parameter '{parameter}'")]
    UnknownParameter { template: String, parameter: String },

    /// A parameter value carries a placeholder token of the template itself.
    #[error("Value for '{parameter}' contains the placeholder token '{placeholder}' of template '{template}'")]
    AmbiguousParameter { template: String, parameter: String, placeholder: String },

    /// Template text could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Network or connection failure talking to a provider.
    #[error("Request to {provider} failed: {message}")]
    TransportFailure { provider: String, message: String },

    /// Provider answered with a non-success HTTP status.
    #[error("{provider} returned HTTP {status}: {message}")]
    ProviderStatus { provider: String, status: u16, message: String },

    /// Provider payload does not match the documented response contract.
    #[error("Unexpected response from {provider} (expected {expected}): {details}")]
    UnexpectedResponseShape { provider: String, expected: String, details: String },

    /// Provider did not answer within the configured timeout.
    #[error("{provider} did not respond within {timeout_secs}s")]
    Timeout { provider: String, timeout_secs: u64 },

    /// Operator input is missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// Nothing to generate from; the workflow is skipped.
    #[error("{0}")]
    EmptyInput(String),

    /// Cloud provider has no credential mapping.
    #[error("Unsupported cloud '{0}': must be one of aws, azure, google")]
    UnsupportedCloud(String),

    /// Provider name is not one of the supported backends.
    #[error(
        "Invalid provider '{0}': must be one of bedrock, azure-openai, azure-ai, ollama, gemini"
    )]
    InvalidProvider(String),

    /// Configuration file has invalid values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Git access failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn transport<P: Into<String>>(provider: P, err: impl std::fmt::Display) -> Self {
        AppError::TransportFailure { provider: provider.into(), message: err.to_string() }
    }

    /// Short failure class name used in operator diagnostics.
    pub fn class(&self) -> &'static str {
        match self {
            AppError::Io(_) => "Io",
            AppError::Configuration(_) | AppError::InvalidConfig(_) => "Configuration",
            AppError::TomlParseError(_) => "Configuration",
            AppError::MissingCredential { .. } => "MissingCredential",
            AppError::InvalidCredential { .. } => "InvalidCredential",
            AppError::MissingPlaceholder { .. } => "MissingPlaceholder",
            AppError::UnknownParameter { .. } => "UnknownParameter",
            AppError::AmbiguousParameter { .. } => "AmbiguousParameter",
            AppError::TemplateRender { .. } => "TemplateRender",
            AppError::TransportFailure { .. } => "TransportFailure",
            AppError::ProviderStatus { .. } => "ProviderStatus",
            AppError::UnexpectedResponseShape { .. } => "UnexpectedResponseShape",
            AppError::Timeout { .. } => "Timeout",
            AppError::Validation(_) => "Validation",
            AppError::EmptyInput(_) => "EmptyInput",
            AppError::UnsupportedCloud(_) => "UnsupportedCloud",
            AppError::InvalidProvider(_) => "InvalidProvider",
            AppError::GitError { .. } => "Git",
        }
    }

    /// Whether the error means "nothing to do" rather than a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AppError::EmptyInput(_))
    }
}
