use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::{self, ChatMessage, ResponseContract};
use crate::domain::provider::{LOCAL_DAEMON_MODEL, LOCAL_DAEMON_POLICY};
use crate::domain::{AppError, ProviderKind};
use crate::ports::GenerationClient;

const CONTRACT: ResponseContract = ResponseContract {
    provider: ProviderKind::LocalDaemon,
    version: "ollama-api-chat",
    text_path: "message.content",
};

/// Client for a locally running Ollama daemon.
#[derive(Debug)]
pub struct OllamaClient {
    client: Client,
    chat_url: Url,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    options: ChatOptions,
    stream: bool,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OllamaClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, AppError> {
        let chat_url = chat_url(base_url)?;
        let client = http::build_client(ProviderKind::LocalDaemon, timeout)?;
        Ok(Self { client, chat_url, timeout })
    }
}

/// `{base}/api/chat`, keeping any path prefix of the base URL.
fn chat_url(base_url: &Url) -> Result<Url, AppError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| {
            AppError::InvalidConfig(format!("ollama_url '{}' cannot carry a path", base_url))
        })?
        .pop_if_empty()
        .extend(["api", "chat"]);
    Ok(url)
}

impl GenerationClient for OllamaClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LocalDaemon
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        let payload = ChatRequest {
            model: LOCAL_DAEMON_MODEL,
            messages: [ChatMessage::user(prompt)],
            options: ChatOptions { temperature: LOCAL_DAEMON_POLICY.temperature },
            stream: false,
        };

        let request = self.client.post(self.chat_url.clone()).json(&payload);
        let body = http::send(self.kind(), self.timeout, request)?;

        CONTRACT.extract::<ChatResponse, _>(&body, |response| response.message?.content)
    }
}
