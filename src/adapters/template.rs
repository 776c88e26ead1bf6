use minijinja::{Environment, UndefinedBehavior};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::domain::AppError;
use crate::domain::prompt::{PromptTemplate, TemplateRenderer};

/// Template renderer using Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &PromptTemplate,
        params: &BTreeMap<String, String>,
    ) -> Result<String, AppError> {
        let template_name = template.id().name();
        if let Some(token) = disallowed_template_token(template.body()) {
            return Err(AppError::TemplateRender {
                template: template_name.to_string(),
                reason: format!("template syntax '{}' is not allowed in prompts", token),
            });
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template.body(), params)
            .map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
