//! Generation facade: one prompt in, one provider call, generated text out.

use std::time::Instant;

use tracing::{debug, info};

use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::domain::prompt::{TemplateRenderer, render_prompt};
use crate::domain::{AppError, GenerationRequest, PromptCatalog, ProviderKind, Settings, credentials};
use crate::ports::{ClientFactory, EnvSource};

/// Renders prompts and sends them to the single configured provider.
pub struct Generator<E: EnvSource, F: ClientFactory, R: TemplateRenderer = MinijinjaTemplateRenderer> {
    catalog: PromptCatalog,
    renderer: R,
    settings: Settings,
    kind: ProviderKind,
    env: E,
    factory: F,
}

impl<E: EnvSource, F: ClientFactory> Generator<E, F> {
    pub fn new(settings: Settings, kind: ProviderKind, env: E, factory: F) -> Result<Self, AppError> {
        Ok(Self {
            catalog: PromptCatalog::embedded()?,
            renderer: MinijinjaTemplateRenderer::new(),
            settings,
            kind,
            env,
            factory,
        })
    }
}

impl<E: EnvSource, F: ClientFactory, R: TemplateRenderer> Generator<E, F, R> {
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Render the prompt for `request` without contacting any provider.
    pub fn render(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let template = self.catalog.get(request.template())?;
        render_prompt(&self.renderer, template, request)
    }

    /// Render, resolve credentials, build the client and invoke it once.
    ///
    /// Placeholder and credential failures return before any client exists.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let prompt = self.render(request)?;
        let config = credentials::resolve(self.kind, &self.settings, &self.env)?;
        let client = self.factory.create(&config)?;

        info!(provider = %self.kind, template = %request.template(), "generating");
        let started = Instant::now();
        let text = client.invoke(&prompt)?;
        debug!(
            provider = %self.kind,
            template = %request.template(),
            prompt_chars = prompt.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generation finished"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateId;
    use crate::testing::{FakeClient, FakeClientFactory, MapEnv};

    fn generator(kind: ProviderKind, env: MapEnv, client: FakeClient) -> Generator<MapEnv, FakeClientFactory> {
        Generator::new(Settings::default(), kind, env, FakeClientFactory::new(client)).unwrap()
    }

    fn commit_request() -> GenerationRequest {
        GenerationRequest::new(TemplateId::CommitMessage).with_param("diff", "+fix\n")
    }

    #[test]
    fn missing_placeholder_never_reaches_the_provider() {
        let client = FakeClient::replying("unused");
        let generator = generator(ProviderKind::LocalDaemon, MapEnv::new(), client.clone());

        let err = generator.generate(&GenerationRequest::new(TemplateId::CommitMessage)).unwrap_err();

        assert!(matches!(
            err,
            AppError::MissingPlaceholder { ref placeholders, .. } if placeholders == &["diff"]
        ));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn missing_credentials_build_no_client() {
        for kind in [
            ProviderKind::ChatCompletion,
            ProviderKind::RawInference,
            ProviderKind::GenerativeLanguage,
        ] {
            let client = FakeClient::replying("unused");
            let generator = generator(kind, MapEnv::new(), client.clone());

            let err = generator.generate(&commit_request()).unwrap_err();

            assert_eq!(err.class(), "MissingCredential", "kind {}", kind);
            assert!(generator.factory.configs.lock().unwrap().is_empty(), "kind {}", kind);
            assert_eq!(client.call_count(), 0, "kind {}", kind);
        }
    }

    #[test]
    fn resolved_config_reaches_the_factory_and_prompt_reaches_the_client() {
        let env = MapEnv::new().with(credentials::GEMINI_API_KEY, "key");
        let client = FakeClient::replying("Fix division by zero");
        let generator = generator(ProviderKind::GenerativeLanguage, env, client.clone());

        let text = generator.generate(&commit_request()).unwrap();

        assert_eq!(text, "Fix division by zero");
        let configs = generator.factory.configs.lock().unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].kind(), ProviderKind::GenerativeLanguage);
        assert!(client.last_prompt().unwrap().contains("+fix\n"));
    }

    #[test]
    fn provider_errors_propagate_unchanged() {
        let client = FakeClient::failing(|| AppError::ProviderStatus {
            provider: "ollama".into(),
            status: 500,
            message: "out of memory".into(),
        });
        let generator = generator(ProviderKind::LocalDaemon, MapEnv::new(), client.clone());

        let err = generator.generate(&commit_request()).unwrap_err();

        assert!(matches!(
            err,
            AppError::ProviderStatus { status: 500, ref message, .. } if message == "out of memory"
        ));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn render_does_not_touch_the_factory() {
        let generator = generator(ProviderKind::ChatCompletion, MapEnv::new(), FakeClient::replying(""));

        let prompt = generator.render(&commit_request()).unwrap();

        assert!(prompt.contains("+fix"));
        assert!(generator.factory.configs.lock().unwrap().is_empty());
    }
}
