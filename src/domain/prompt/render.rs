use std::collections::BTreeMap;

use super::request::GenerationRequest;
use super::template::{PromptTemplate, placeholder_tokens};
use crate::domain::AppError;

/// Trait for substituting placeholder values into a template body.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with already validated `params`.
    fn render(
        &self,
        template: &PromptTemplate,
        params: &BTreeMap<String, String>,
    ) -> Result<String, AppError>;
}

/// Validate `request` against `template` and render the prompt text.
///
/// Fails before any substitution when a placeholder has no value, when a parameter is
/// not declared by the template, or when a value carries one of the template's own
/// placeholder tokens.
pub fn render_prompt<R>(
    renderer: &R,
    template: &PromptTemplate,
    request: &GenerationRequest,
) -> Result<String, AppError>
where
    R: TemplateRenderer + ?Sized,
{
    let template_name = template.id().name();
    let params = request.params();

    let missing: Vec<String> = template
        .placeholders()
        .iter()
        .filter(|name| !params.contains_key(**name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingPlaceholder {
            template: template_name.to_string(),
            placeholders: missing,
        });
    }

    if let Some(unknown) = params.keys().find(|key| !template.placeholders().contains(&key.as_str()))
    {
        return Err(AppError::UnknownParameter {
            template: template_name.to_string(),
            parameter: unknown.clone(),
        });
    }

    for (name, value) in params {
        if let Some(token) = placeholder_tokens(value)
            .into_iter()
            .find(|token| template.placeholders().contains(&token.as_str()))
        {
            return Err(AppError::AmbiguousParameter {
                template: template_name.to_string(),
                parameter: name.clone(),
                placeholder: format!("{{{{ {} }}}}", token),
            });
        }
    }

    renderer.render(template, params)
}
