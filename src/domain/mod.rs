pub mod artifact;
pub mod cloud;
pub mod credentials;
pub mod dependency;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod settings;

pub use artifact::{Artifact, GeneratedArtifact};
pub use cloud::CloudProvider;
pub use dependency::DependencyInfo;
pub use error::AppError;
pub use prompt::{GenerationRequest, PromptCatalog, PromptTemplate, TemplateId};
pub use provider::{GenerationPolicy, ProviderConfig, ProviderKind};
pub use settings::{SETTINGS_FILE, Settings, parse_settings_content};
