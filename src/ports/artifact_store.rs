use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the directory generated artifacts are inspected and written in.
pub trait ArtifactStore {
    /// Check whether `file_name` exists inside `dir`.
    fn file_exists(&self, dir: &Path, file_name: &str) -> bool;

    /// Write `content` to `dir/file_name`, replacing any previous file as a whole.
    ///
    /// Returns the path written.
    fn write_artifact(&self, dir: &Path, file_name: &str, content: &str)
    -> Result<PathBuf, AppError>;
}
