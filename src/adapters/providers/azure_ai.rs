use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::{self, ResponseContract};
use crate::domain::{AppError, ProviderKind};
use crate::ports::GenerationClient;

const CONTRACT: ResponseContract = ResponseContract {
    provider: ProviderKind::RawInference,
    version: "azureml-score-v1",
    text_path: "output[0]",
};

/// Azure AI Foundry raw inference client.
pub struct AzureAiClient {
    client: Client,
    endpoint: Url,
    token: String,
    timeout: Duration,
}

impl fmt::Debug for AzureAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureAiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    input_data: InputData<'a>,
}

#[derive(Serialize)]
struct InputData<'a> {
    input_string: [&'a str; 1],
}

#[derive(Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    output: Vec<String>,
}

impl AzureAiClient {
    pub fn new(endpoint: Url, token: String, timeout: Duration) -> Result<Self, AppError> {
        let client = http::build_client(ProviderKind::RawInference, timeout)?;
        Ok(Self { client, endpoint, token, timeout })
    }
}

impl GenerationClient for AzureAiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RawInference
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        let payload = InferenceRequest { input_data: InputData { input_string: [prompt] } };

        let request = self.client.post(self.endpoint.clone()).bearer_auth(&self.token).json(&payload);
        let body = http::send(self.kind(), self.timeout, request)?;

        CONTRACT.extract::<InferenceResponse, _>(&body, |response| response.output.into_iter().next())
    }
}
