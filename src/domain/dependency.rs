//! Dependency-manifest detection feeding the Dockerfile prompt.

use std::path::Path;

use crate::ports::ArtifactStore;

pub const NO_DEPENDENCY_INSTRUCTIONS: &str = "No specific dependency installation needed";

/// Whether a project ships a dependency manifest and how to install from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyInfo {
    pub has_dependencies: bool,
    pub instructions: String,
}

impl DependencyInfo {
    pub fn none() -> Self {
        Self { has_dependencies: false, instructions: NO_DEPENDENCY_INSTRUCTIONS.to_string() }
    }

    pub fn from_manifest(manifest: &str) -> Self {
        Self {
            has_dependencies: true,
            instructions: format!("Install dependencies from {}", manifest),
        }
    }

    /// Verb phrase used in the prompt ("has" / "doesn't have").
    pub fn presence(&self) -> &'static str {
        if self.has_dependencies { "has" } else { "doesn't have" }
    }
}

/// Manifest files checked for a language, in priority order.
pub fn manifest_candidates(language: &str) -> &'static [&'static str] {
    match language.trim().to_ascii_lowercase().as_str() {
        "python" | "py" => &["requirements.txt", "Pipfile", "pyproject.toml"],
        "node" | "nodejs" | "node.js" | "javascript" | "js" | "typescript" | "ts" => {
            &["package.json"]
        }
        "java" => &["pom.xml", "build.gradle"],
        "go" | "golang" => &["go.mod"],
        "rust" => &["Cargo.toml"],
        "ruby" => &["Gemfile"],
        "php" => &["composer.json"],
        _ => &[],
    }
}

/// Inspect `dir` for the first manifest `language` is known to use.
pub fn detect<S>(store: &S, dir: &Path, language: &str) -> DependencyInfo
where
    S: ArtifactStore + ?Sized,
{
    manifest_candidates(language)
        .iter()
        .find(|manifest| store.file_exists(dir, manifest))
        .map(|manifest| DependencyInfo::from_manifest(manifest))
        .unwrap_or_else(DependencyInfo::none)
}
