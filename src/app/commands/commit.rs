//! Commit-message suggestion from the last commit's diff.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, Artifact, GeneratedArtifact, GenerationRequest};
use crate::ports::{ArtifactStore, ClientFactory, EnvSource, GitPort};

pub const DIFF_FROM: &str = "HEAD~1";
pub const DIFF_TO: &str = "HEAD";

/// Suggest a commit message for `HEAD~1..HEAD`. Never writes files.
pub fn execute<E, F, G, S>(ctx: &AppContext<E, F, G, S>) -> Result<GeneratedArtifact, AppError>
where
    E: EnvSource,
    F: ClientFactory,
    G: GitPort,
    S: ArtifactStore,
{
    let diff = ctx
        .git()
        .diff(DIFF_FROM, DIFF_TO)?
        .filter(|diff| !diff.trim().is_empty())
        .ok_or_else(|| {
            AppError::EmptyInput(format!(
                "No diff found between {} and {}; nothing to describe",
                DIFF_FROM, DIFF_TO
            ))
        })?;
    debug!(diff_bytes = diff.len(), "diff collected");

    let artifact = Artifact::CommitMessage;
    let request = GenerationRequest::new(artifact.template()).with_param("diff", diff);
    let message = ctx.generator().generate(&request)?;

    Ok(GeneratedArtifact::new(artifact, message.trim()))
}
