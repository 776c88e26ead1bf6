use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::{DEFAULT_DIR, required};
use crate::domain::{AppError, Artifact, GeneratedArtifact, GenerationRequest, dependency};
use crate::ports::{ArtifactStore, ClientFactory, EnvSource, GitPort};

#[derive(Debug, Clone)]
pub struct DockerfileOptions {
    pub language: String,
    /// Directory inspected for dependency manifests.
    pub project_dir: PathBuf,
}

impl DockerfileOptions {
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into(), project_dir: PathBuf::from(DEFAULT_DIR) }
    }
}

pub fn execute<E, F, G, S>(
    ctx: &AppContext<E, F, G, S>,
    options: &DockerfileOptions,
) -> Result<GeneratedArtifact, AppError>
where
    E: EnvSource,
    F: ClientFactory,
    G: GitPort,
    S: ArtifactStore,
{
    let language = required(&options.language, "Language")?;
    let dependencies = dependency::detect(ctx.store(), &options.project_dir, &language);

    let artifact = Artifact::Dockerfile;
    let request = GenerationRequest::new(artifact.template())
        .with_param("language", language)
        .with_param("has_dependencies", dependencies.presence())
        .with_param("dependency_instructions", dependencies.instructions);

    let text = ctx.generator().generate(&request)?;
    Ok(GeneratedArtifact::new(artifact, text))
}
