mod artifact_store;
mod environment;
mod generation_client;
mod git;

pub use artifact_store::ArtifactStore;
pub use environment::EnvSource;
pub use generation_client::{ClientFactory, GenerationClient};
pub use git::GitPort;
