//! Shared testing harness for `infragen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty git repository.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        git_repository::init_repo(&work_dir);

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the repository used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Commit a file inside the work directory.
    pub(crate) fn commit_file(&self, file: &str, content: &str, message: &str) {
        git_repository::commit_file(&self.work_dir, file, content, message);
    }

    /// Write an `infragen.toml` into the work directory.
    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("infragen.toml"), content).expect("Failed to write settings");
    }

    /// Build a command for the compiled binary with a scrubbed environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("infragen").expect("Failed to locate infragen binary");
        cmd.current_dir(&self.work_dir).env_clear().env("HOME", self.home());
        cmd
    }
}
