use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Artifact store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing (empty) file.
    pub fn with_file(self, dir: impl AsRef<Path>, file_name: &str) -> Self {
        self.files.lock().unwrap().insert(dir.as_ref().join(file_name), String::new());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn file_exists(&self, dir: &Path, file_name: &str) -> bool {
        self.files.lock().unwrap().contains_key(&dir.join(file_name))
    }

    fn write_artifact(
        &self,
        dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, AppError> {
        let path = dir.join(file_name);
        self.files.lock().unwrap().insert(path.clone(), content.to_string());
        Ok(path)
    }
}
