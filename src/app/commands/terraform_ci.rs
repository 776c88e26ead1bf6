use crate::app::AppContext;
use crate::app::commands::{DEFAULT_BRANCH, DEFAULT_DIR, or_default};
use crate::domain::{AppError, Artifact, CloudProvider, GeneratedArtifact, GenerationRequest};
use crate::ports::{ArtifactStore, ClientFactory, EnvSource, GitPort};

#[derive(Debug, Clone)]
pub struct TerraformCiOptions {
    /// Cloud name as typed by the operator; validated before rendering.
    pub cloud: String,
    pub branch: String,
    pub tf_dir: String,
}

impl TerraformCiOptions {
    pub fn new(cloud: impl Into<String>) -> Self {
        Self {
            cloud: cloud.into(),
            branch: DEFAULT_BRANCH.to_string(),
            tf_dir: DEFAULT_DIR.to_string(),
        }
    }
}

pub fn execute<E, F, G, S>(
    ctx: &AppContext<E, F, G, S>,
    options: &TerraformCiOptions,
) -> Result<GeneratedArtifact, AppError>
where
    E: EnvSource,
    F: ClientFactory,
    G: GitPort,
    S: ArtifactStore,
{
    let cloud: CloudProvider = options.cloud.parse()?;

    let artifact = Artifact::TerraformCi;
    let request = GenerationRequest::new(artifact.template())
        .with_param("branch", or_default(&options.branch, DEFAULT_BRANCH))
        .with_param("credentials", cloud.credentials())
        .with_param("tf_dir", or_default(&options.tf_dir, DEFAULT_DIR));

    let text = ctx.generator().generate(&request)?;
    Ok(GeneratedArtifact::new(artifact, text))
}
