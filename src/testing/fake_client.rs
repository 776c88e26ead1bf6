use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ProviderConfig, ProviderKind};
use crate::ports::{ClientFactory, GenerationClient};

#[derive(Clone)]
enum Reply {
    Text(String),
    Fail(fn() -> AppError),
}

/// Generation client answering every prompt with a canned reply.
#[derive(Clone)]
pub struct FakeClient {
    kind: ProviderKind,
    reply: Reply,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            kind: ProviderKind::LocalDaemon,
            reply: Reply::Text(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: fn() -> AppError) -> Self {
        Self { reply: Reply::Fail(error), ..Self::replying("") }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl GenerationClient for FakeClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(error) => Err(error()),
        }
    }
}

/// Factory handing out a shared [`FakeClient`] and recording requested configs.
pub struct FakeClientFactory {
    pub client: FakeClient,
    pub configs: Arc<Mutex<Vec<ProviderConfig>>>,
}

impl FakeClientFactory {
    pub fn new(client: FakeClient) -> Self {
        Self { client, configs: Arc::new(Mutex::new(Vec::new())) }
    }
}

impl ClientFactory for FakeClientFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn GenerationClient>, AppError> {
        self.configs.lock().unwrap().push(config.clone());
        let mut client = self.client.clone();
        client.kind = config.kind();
        Ok(Box::new(client))
    }
}
