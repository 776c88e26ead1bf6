//! HTTP plumbing shared by the provider adapters.
//!
//! Every adapter performs exactly one request per call; there is no retry layer.

use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{AppError, ProviderKind};

const DEFAULT_STATUS_MESSAGE: &str = "Provider request failed";
const BODY_SNIPPET_CHARS: usize = 200;

/// Documented location of the generated text in a provider's response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseContract {
    pub provider: ProviderKind,
    /// API or schema revision the contract was written against.
    pub version: &'static str,
    pub text_path: &'static str,
}

impl ResponseContract {
    fn expected(&self) -> String {
        format!("{} per {}", self.text_path, self.version)
    }

    fn shape_error(&self, details: String) -> AppError {
        AppError::UnexpectedResponseShape {
            provider: self.provider.name().to_string(),
            expected: self.expected(),
            details,
        }
    }

    /// Deserialize `body` and pull the generated text out with `pick`.
    pub fn extract<T, F>(&self, body: &str, pick: F) -> Result<String, AppError>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Option<String>,
    {
        let envelope: T = serde_json::from_str(body).map_err(|e| {
            self.shape_error(format!("invalid JSON envelope ({}); body: {}", e, snippet(body)))
        })?;

        let text = pick(envelope)
            .ok_or_else(|| self.shape_error(format!("field missing; body: {}", snippet(body))))?;

        if text.trim().is_empty() {
            return Err(self.shape_error("generated text is empty".to_string()));
        }

        Ok(text)
    }
}

/// Single user-role chat message, shared by chat-style APIs.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn user(content: &'a str) -> Self {
        Self { role: "user", content }
    }
}

/// Build a blocking client that gives up after `timeout`.
pub fn build_client(provider: ProviderKind, timeout: Duration) -> Result<Client, AppError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        AppError::config_error(format!("Failed to create HTTP client for {}: {}", provider, e))
    })
}

/// Send `request` and return the body of a 2xx response.
pub fn send(
    provider: ProviderKind,
    timeout: Duration,
    request: RequestBuilder,
) -> Result<String, AppError> {
    let started = Instant::now();
    let response = request.send().map_err(|e| request_error(provider, timeout, e))?;

    let status = response.status();
    let body_text = response.text().map_err(|e| request_error(provider, timeout, e))?;

    debug!(
        provider = %provider,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        bytes = body_text.len(),
        "provider responded"
    );

    if status.is_success() {
        return Ok(body_text);
    }

    let message = extract_error_message(&body_text).unwrap_or_else(|| {
        if !body_text.trim().is_empty() {
            snippet(&body_text)
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    Err(AppError::ProviderStatus {
        provider: provider.name().to_string(),
        status: status.as_u16(),
        message,
    })
}

fn request_error(provider: ProviderKind, timeout: Duration, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout { provider: provider.name().to_string(), timeout_secs: timeout.as_secs() }
    } else {
        AppError::transport(provider.name(), err)
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message").or(Some(error)))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_SNIPPET_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(BODY_SNIPPET_CHARS).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const CONTRACT: ResponseContract = ResponseContract {
        provider: ProviderKind::RawInference,
        version: "test-v1",
        text_path: "output[0]",
    };

    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default)]
        output: Vec<String>,
    }

    #[test]
    fn extract_returns_picked_text() {
        let text = CONTRACT
            .extract::<Envelope, _>(r#"{"output":["X"]}"#, |e| e.output.into_iter().next())
            .unwrap();
        assert_eq!(text, "X");
    }

    #[test]
    fn extract_reports_missing_field() {
        let err = CONTRACT
            .extract::<Envelope, _>(r#"{"result":"X"}"#, |e| e.output.into_iter().next())
            .unwrap_err();
        match err {
            AppError::UnexpectedResponseShape { provider, expected, details } => {
                assert_eq!(provider, "azure-ai");
                assert_eq!(expected, "output[0] per test-v1");
                assert!(details.contains(r#"{"result":"X"}"#));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn extract_reports_invalid_json_and_blank_text() {
        let err = CONTRACT.extract::<Envelope, _>("<html>", |e| e.output.into_iter().next());
        assert_eq!(err.unwrap_err().class(), "UnexpectedResponseShape");

        let err = CONTRACT.extract::<Envelope, _>(r#"{"output":["  "]}"#, |e| {
            e.output.into_iter().next()
        });
        assert!(err.unwrap_err().to_string().contains("generated text is empty"));
    }

    #[test]
    fn error_message_prefers_nested_message() {
        assert_eq!(
            extract_error_message(r#"{"error":{"message":"quota exceeded"}}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(extract_error_message(r#"{"error":"model not found"}"#).as_deref(), Some("model not found"));
        assert_eq!(extract_error_message(r#"{"message":"denied"}"#).as_deref(), Some("denied"));
        assert_eq!(extract_error_message("plain"), None);
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "a".repeat(500);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), BODY_SNIPPET_CHARS + 1);
        assert!(cut.ends_with('…'));
    }
}
