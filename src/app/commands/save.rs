use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, GeneratedArtifact};
use crate::ports::ArtifactStore;

/// Write a generated artifact to `dir/<file name>`.
///
/// Blank text and artifacts without a file name are refused and nothing is written.
pub fn execute<S>(store: &S, generated: &GeneratedArtifact, dir: &Path) -> Result<PathBuf, AppError>
where
    S: ArtifactStore + ?Sized,
{
    let file_name = generated.artifact.file_name().ok_or_else(|| {
        AppError::Validation(format!("A {} is not saved to a file", generated.artifact))
    })?;

    if generated.content.trim().is_empty() {
        return Err(AppError::EmptyInput(format!(
            "Generated {} is empty; nothing was saved",
            generated.artifact
        )));
    }

    let path = store.write_artifact(dir, file_name, &generated.content)?;
    debug!(path = %path.display(), "artifact saved");
    Ok(path)
}
