use std::collections::BTreeSet;
use std::fmt;

use crate::domain::AppError;

/// Identifier of an embedded prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    CommitMessage,
    Dockerfile,
    CiDocker,
    CiTerraform,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::CommitMessage,
        TemplateId::Dockerfile,
        TemplateId::CiDocker,
        TemplateId::CiTerraform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateId::CommitMessage => "commit-message",
            TemplateId::Dockerfile => "dockerfile",
            TemplateId::CiDocker => "ci-docker",
            TemplateId::CiTerraform => "ci-terraform",
        }
    }

    /// Asset file holding the template body.
    pub fn asset_file(self) -> String {
        format!("{}.md", self.name())
    }

    /// Placeholders the template body is rendered with, in prompt order.
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            TemplateId::CommitMessage => &["diff"],
            TemplateId::Dockerfile => &["language", "has_dependencies", "dependency_instructions"],
            TemplateId::CiDocker => &["branch", "app_dir", "dockerhub_username", "image_name"],
            TemplateId::CiTerraform => &["branch", "credentials", "tf_dir"],
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable prompt blueprint: identifier, declared placeholders and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    id: TemplateId,
    placeholders: &'static [&'static str],
    body: &'static str,
}

impl PromptTemplate {
    /// Build a template, checking that the body uses exactly the declared placeholders.
    pub fn new(
        id: TemplateId,
        placeholders: &'static [&'static str],
        body: &'static str,
    ) -> Result<Self, AppError> {
        let declared: BTreeSet<&str> = placeholders.iter().copied().collect();
        let used = placeholder_tokens(body);

        if let Some(undeclared) = used.iter().find(|name| !declared.contains(name.as_str())) {
            return Err(AppError::TemplateRender {
                template: id.name().to_string(),
                reason: format!("body uses undeclared placeholder '{}'", undeclared),
            });
        }
        if let Some(unused) = placeholders.iter().find(|name| !used.iter().any(|u| u == *name)) {
            return Err(AppError::TemplateRender {
                template: id.name().to_string(),
                reason: format!("declared placeholder '{}' never appears in body", unused),
            });
        }

        Ok(Self { id, placeholders, body })
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn placeholders(&self) -> &'static [&'static str] {
        self.placeholders
    }

    pub fn body(&self) -> &'static str {
        self.body
    }
}

/// Names of all `{{ name }}` placeholder tokens in `text`, in first-seen order.
///
/// Only simple identifiers count; expressions such as `{{ secrets.TOKEN }}` are ignored.
pub fn placeholder_tokens(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };
        let inner = after_open[..end].trim();
        if is_identifier(inner) && !names.iter().any(|name| name == inner) {
            names.push(inner.to_string());
        }
        rest = &after_open[end + 2..];
    }

    names
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
