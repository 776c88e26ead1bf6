use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::{self, ChatMessage, ResponseContract};
use crate::domain::provider::{CHAT_COMPLETION_API_VERSION, CHAT_COMPLETION_POLICY};
use crate::domain::{AppError, ProviderKind};
use crate::ports::GenerationClient;

const CONTRACT: ResponseContract = ResponseContract {
    provider: ProviderKind::ChatCompletion,
    version: CHAT_COMPLETION_API_VERSION,
    text_path: "choices[0].message.content",
};

/// Azure OpenAI chat-completions client.
pub struct AzureOpenAiClient {
    client: Client,
    url: Url,
    api_key: String,
    timeout: Duration,
}

impl fmt::Debug for AzureOpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureOpenAiClient")
            .field("url", &self.url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<AssistantMessage>,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl AzureOpenAiClient {
    pub fn new(
        endpoint: &Url,
        api_key: String,
        deployment: &str,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let url = completions_url(endpoint, deployment)?;
        let client = http::build_client(ProviderKind::ChatCompletion, timeout)?;
        Ok(Self { client, url, api_key, timeout })
    }
}

fn completions_url(endpoint: &Url, deployment: &str) -> Result<Url, AppError> {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidCredential {
            variable: "AZURE_OPENAI_ENDPOINT".to_string(),
            reason: "endpoint cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(["openai", "deployments", deployment, "chat", "completions"]);
    url.query_pairs_mut().append_pair("api-version", CHAT_COMPLETION_API_VERSION);
    Ok(url)
}

impl GenerationClient for AzureOpenAiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ChatCompletion
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        let payload = ChatCompletionRequest {
            messages: [ChatMessage::user(prompt)],
            temperature: CHAT_COMPLETION_POLICY.temperature,
        };

        let request = self
            .client
            .post(self.url.clone())
            .header("api-key", &self.api_key)
            .json(&payload);
        let body = http::send(self.kind(), self.timeout, request)?;

        CONTRACT.extract::<ChatCompletionResponse, _>(&body, |response| {
            response.choices.into_iter().next()?.message?.content
        })
    }
}
