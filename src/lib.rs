//! infragen: generate commit messages, Dockerfiles and CI workflows through
//! interchangeable text-generation providers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Artifact, CloudProvider, DockerCiOptions, DockerfileOptions, GeneratedArtifact, ProviderKind,
    RunOptions, TerraformCiOptions, commit, commit_at, docker_ci, dockerfile, save, terraform_ci,
};
pub use domain::AppError;
