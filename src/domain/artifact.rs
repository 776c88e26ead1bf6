use std::fmt;

use crate::domain::prompt::TemplateId;

/// Kinds of artifact the workflows produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    CommitMessage,
    Dockerfile,
    DockerCi,
    TerraformCi,
}

impl Artifact {
    pub fn template(self) -> TemplateId {
        match self {
            Artifact::CommitMessage => TemplateId::CommitMessage,
            Artifact::Dockerfile => TemplateId::Dockerfile,
            Artifact::DockerCi => TemplateId::CiDocker,
            Artifact::TerraformCi => TemplateId::CiTerraform,
        }
    }

    /// File name the artifact is saved under; commit messages are never saved.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            Artifact::CommitMessage => None,
            Artifact::Dockerfile => Some("Dockerfile"),
            Artifact::DockerCi => Some("docker-ci.yml"),
            Artifact::TerraformCi => Some("terraform.yml"),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Artifact::CommitMessage => "commit message",
            Artifact::Dockerfile => "Dockerfile",
            Artifact::DockerCi => "Docker CI workflow",
            Artifact::TerraformCi => "Terraform CI workflow",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Text produced for an artifact by one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub artifact: Artifact,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(artifact: Artifact, content: impl Into<String>) -> Self {
        Self { artifact, content: content.into() }
    }
}
