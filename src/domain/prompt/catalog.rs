//! Embedded prompt templates.

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};

use super::template::{PromptTemplate, TemplateId};
use crate::domain::AppError;

static PROMPTS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// All prompt templates, built once at startup.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    templates: BTreeMap<TemplateId, PromptTemplate>,
}

impl PromptCatalog {
    /// Load and validate every template compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        let mut templates = BTreeMap::new();

        for id in TemplateId::ALL {
            let file_name = id.asset_file();
            let body = PROMPTS
                .get_file(&file_name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::TemplateRender {
                    template: id.name().to_string(),
                    reason: format!("embedded asset '{}' is missing or not UTF-8", file_name),
                })?;

            templates.insert(id, PromptTemplate::new(id, id.placeholders(), body)?);
        }

        Ok(Self { templates })
    }

    pub fn get(&self, id: TemplateId) -> Result<&PromptTemplate, AppError> {
        self.templates.get(&id).ok_or_else(|| AppError::TemplateRender {
            template: id.name().to_string(),
            reason: "template is not registered".to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptTemplate> {
        self.templates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_embedded_and_valid() {
        let catalog = PromptCatalog::embedded().unwrap();
        for id in TemplateId::ALL {
            let template = catalog.get(id).unwrap();
            assert_eq!(template.id(), id);
            assert_eq!(template.placeholders(), id.placeholders());
        }
        assert_eq!(catalog.iter().count(), TemplateId::ALL.len());
    }

    #[test]
    fn commit_template_ends_with_the_diff() {
        let catalog = PromptCatalog::embedded().unwrap();
        let body = catalog.get(TemplateId::CommitMessage).unwrap().body();
        assert!(body.starts_with("Based on the following Git diff"));
        assert!(body.trim_end().ends_with("{{ diff }}"));
    }

    #[test]
    fn docker_ci_template_tags_image_with_user_and_name() {
        let catalog = PromptCatalog::embedded().unwrap();
        let body = catalog.get(TemplateId::CiDocker).unwrap().body();
        assert!(body.contains("`{{ dockerhub_username }}/{{ image_name }}:latest`"));
    }
}
