use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-backed artifact store.
///
/// Writes go to a hidden temporary sibling first and are renamed into place,
/// so a failed write never leaves a truncated artifact behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn file_exists(&self, dir: &Path, file_name: &str) -> bool {
        dir.join(file_name).is_file()
    }

    fn write_artifact(
        &self,
        dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir)?;
        let target = dir.join(file_name);
        let temp = dir.join(format!(".{}.tmp-{}", file_name, std::process::id()));

        let written = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp, &target)
        })();

        if let Err(err) = written {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        Ok(fs::canonicalize(&target).unwrap_or(target))
    }
}
