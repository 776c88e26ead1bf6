use std::collections::BTreeMap;

use super::template::TemplateId;

/// A template identifier plus the values for its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    template: TemplateId,
    params: BTreeMap<String, String>,
}

impl GenerationRequest {
    pub fn new(template: TemplateId) -> Self {
        Self { template, params: BTreeMap::new() }
    }

    /// Add a placeholder value to the request.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}
