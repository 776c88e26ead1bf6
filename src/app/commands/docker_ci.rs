use crate::app::AppContext;
use crate::app::commands::{DEFAULT_BRANCH, DEFAULT_DIR, or_default, required};
use crate::domain::{AppError, Artifact, GeneratedArtifact, GenerationRequest};
use crate::ports::{ArtifactStore, ClientFactory, EnvSource, GitPort};

#[derive(Debug, Clone)]
pub struct DockerCiOptions {
    pub branch: String,
    pub app_dir: String,
    pub dockerhub_username: String,
    pub image_name: String,
}

impl DockerCiOptions {
    pub fn new(dockerhub_username: impl Into<String>, image_name: impl Into<String>) -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            app_dir: DEFAULT_DIR.to_string(),
            dockerhub_username: dockerhub_username.into(),
            image_name: image_name.into(),
        }
    }
}

pub fn execute<E, F, G, S>(
    ctx: &AppContext<E, F, G, S>,
    options: &DockerCiOptions,
) -> Result<GeneratedArtifact, AppError>
where
    E: EnvSource,
    F: ClientFactory,
    G: GitPort,
    S: ArtifactStore,
{
    let username = required(&options.dockerhub_username, "Docker Hub username")?;
    let image = required(&options.image_name, "Image name")?;

    let artifact = Artifact::DockerCi;
    let request = GenerationRequest::new(artifact.template())
        .with_param("branch", or_default(&options.branch, DEFAULT_BRANCH))
        .with_param("app_dir", or_default(&options.app_dir, DEFAULT_DIR))
        .with_param("dockerhub_username", username)
        .with_param("image_name", image);

    let text = ctx.generator().generate(&request)?;
    Ok(GeneratedArtifact::new(artifact, text))
}
