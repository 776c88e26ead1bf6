//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::artifact_filesystem::FilesystemArtifactStore;
use crate::adapters::environment::ProcessEnv;
use crate::adapters::git_repository::GitRepositoryAdapter;
use crate::adapters::providers::HttpClientFactory;
use crate::app::commands::{commit, docker_ci, dockerfile, save, terraform_ci};
use crate::app::{AppContext, Generator, config};

pub use crate::app::commands::docker_ci::DockerCiOptions;
pub use crate::app::commands::dockerfile::DockerfileOptions;
pub use crate::app::commands::terraform_ci::TerraformCiOptions;
pub use crate::domain::{AppError, Artifact, CloudProvider, GeneratedArtifact, ProviderKind};

/// Process-level choices made before any command runs.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub provider: Option<String>,
    pub timeout_secs: Option<u64>,
    pub config: Option<PathBuf>,
}

type LiveContext =
    AppContext<ProcessEnv, HttpClientFactory<ProcessEnv>, GitRepositoryAdapter, FilesystemArtifactStore>;

/// Create a production context rooted at `work_dir`.
fn create_context(options: &RunOptions, work_dir: PathBuf) -> Result<LiveContext, AppError> {
    let settings = config::load_settings(options.config.as_deref(), &work_dir)?;
    let kind = config::select_provider(options.provider.as_deref(), &ProcessEnv, &settings)?;
    let timeout = config::select_timeout(options.timeout_secs, &settings)?;

    let generator =
        Generator::new(settings, kind, ProcessEnv, HttpClientFactory::new(ProcessEnv, timeout))?;
    Ok(AppContext::new(
        generator,
        GitRepositoryAdapter::new(work_dir),
        FilesystemArtifactStore::new(),
    ))
}

fn current_context(options: &RunOptions) -> Result<LiveContext, AppError> {
    create_context(options, std::env::current_dir()?)
}

/// Suggest a commit message for the last commit of the repository in the current directory.
pub fn commit(options: &RunOptions) -> Result<GeneratedArtifact, AppError> {
    commit::execute(&current_context(options)?)
}

/// Suggest a commit message for the repository containing `path`.
pub fn commit_at(options: &RunOptions, path: impl Into<PathBuf>) -> Result<GeneratedArtifact, AppError> {
    commit::execute(&create_context(options, path.into())?)
}

pub fn dockerfile(
    options: &RunOptions,
    dockerfile_options: &DockerfileOptions,
) -> Result<GeneratedArtifact, AppError> {
    dockerfile::execute(&current_context(options)?, dockerfile_options)
}

pub fn docker_ci(
    options: &RunOptions,
    docker_ci_options: &DockerCiOptions,
) -> Result<GeneratedArtifact, AppError> {
    docker_ci::execute(&current_context(options)?, docker_ci_options)
}

pub fn terraform_ci(
    options: &RunOptions,
    terraform_options: &TerraformCiOptions,
) -> Result<GeneratedArtifact, AppError> {
    terraform_ci::execute(&current_context(options)?, terraform_options)
}

/// Save a generated artifact under `dir`, returning the written path.
pub fn save(generated: &GeneratedArtifact, dir: &Path) -> Result<PathBuf, AppError> {
    save::execute(&FilesystemArtifactStore::new(), generated, dir)
}
