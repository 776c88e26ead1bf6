use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::{self, ResponseContract};
use crate::domain::provider::{GENERATIVE_LANGUAGE_MODEL, GENERATIVE_LANGUAGE_POLICY};
use crate::domain::{AppError, ProviderKind};
use crate::ports::GenerationClient;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";

const CONTRACT: ResponseContract = ResponseContract {
    provider: ProviderKind::GenerativeLanguage,
    version: "v1beta",
    text_path: "candidates[0].content.parts[0].text",
};

/// Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    url: Url,
    api_key: String,
    timeout: Duration,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, AppError> {
        let base = Url::parse(GEMINI_API_BASE)
            .map_err(|e| AppError::config_error(format!("Invalid Gemini API base: {}", e)))?;
        Self::with_base_url(&base, api_key, timeout)
    }

    /// Build a client against a different API root (must end with `/`).
    pub fn with_base_url(base: &Url, api_key: String, timeout: Duration) -> Result<Self, AppError> {
        let url = base
            .join(&format!("models/{}:generateContent", GENERATIVE_LANGUAGE_MODEL))
            .map_err(|e| AppError::config_error(format!("Invalid Gemini API base: {}", e)))?;
        let client = http::build_client(ProviderKind::GenerativeLanguage, timeout)?;
        Ok(Self { client, url, api_key, timeout })
    }
}

impl GenerationClient for GeminiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::GenerativeLanguage
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        let payload = GenerateContentRequest {
            contents: [Content { role: "user", parts: [Part { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: GENERATIVE_LANGUAGE_POLICY.temperature,
                max_output_tokens: GENERATIVE_LANGUAGE_POLICY.max_output_tokens,
            },
        };

        let request = self
            .client
            .post(self.url.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload);
        let body = http::send(self.kind(), self.timeout, request)?;

        CONTRACT.extract::<GenerateContentResponse, _>(&body, |response| {
            response.candidates.into_iter().next()?.content?.parts.into_iter().next()?.text
        })
    }
}
