use std::time::{Duration, SystemTime};

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningParams, SigningSettings, sign};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use super::aws_credentials::AwsAuth;
use super::http::{self, ResponseContract};
use crate::domain::provider::{HOSTED_MODEL_ID, HOSTED_MODEL_POLICY};
use crate::domain::{AppError, ProviderKind};
use crate::ports::GenerationClient;

const SIGNING_SERVICE: &str = "bedrock";
const JSON: &str = "application/json";

const CONTRACT: ResponseContract = ResponseContract {
    provider: ProviderKind::HostedModelInvoke,
    version: "titan-text-v1",
    text_path: "results[0].outputText",
};

/// Bedrock runtime `InvokeModel` client for the Titan text model.
#[derive(Debug)]
pub struct BedrockClient {
    client: Client,
    invoke_url: Url,
    region: String,
    auth: AwsAuth,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeRequest<'a> {
    input_text: &'a str,
    text_generation_config: TextGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextGenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_token_count: Option<u32>,
}

#[derive(Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    results: Vec<InvokeResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvokeResult {
    output_text: Option<String>,
}

impl BedrockClient {
    pub fn new(region: &str, auth: AwsAuth, timeout: Duration) -> Result<Self, AppError> {
        let endpoint = Url::parse(&format!("https://bedrock-runtime.{}.amazonaws.com/", region))
            .map_err(|e| AppError::InvalidConfig(format!("AWS region '{}' is not usable: {}", region, e)))?;
        Self::with_endpoint(&endpoint, region, auth, timeout)
    }

    /// Build a client against a specific runtime endpoint.
    pub fn with_endpoint(
        endpoint: &Url,
        region: &str,
        auth: AwsAuth,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let invoke_url = endpoint
            .join(&format!("model/{}/invoke", HOSTED_MODEL_ID))
            .map_err(|e| AppError::InvalidConfig(format!("Invalid Bedrock endpoint: {}", e)))?;
        let client = http::build_client(ProviderKind::HostedModelInvoke, timeout)?;
        Ok(Self { client, invoke_url, region: region.to_string(), auth, timeout })
    }
}

impl BedrockClient {
    /// SigV4 headers for a JSON `POST` of `body` to the invoke URL.
    fn signature_headers(
        &self,
        credentials: &Credentials,
        body: &[u8],
    ) -> Result<Vec<(String, String)>, AppError> {
        let identity = Identity::from(credentials.clone());
        let params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SIGNING_SERVICE)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(signing_error)?
            .into();
        let signable = SignableRequest::new(
            "POST",
            self.invoke_url.as_str(),
            [("content-type", JSON)].into_iter(),
            SignableBody::Bytes(body),
        )
        .map_err(signing_error)?;

        let (instructions, _signature) = sign(signable, &params).map_err(signing_error)?.into_parts();
        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

fn signing_error(err: impl std::fmt::Display) -> AppError {
    AppError::InvalidCredential {
        variable: "AWS credential provider chain".to_string(),
        reason: format!("request could not be signed: {}", err),
    }
}

impl GenerationClient for BedrockClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HostedModelInvoke
    }

    fn invoke(&self, prompt: &str) -> Result<String, AppError> {
        let payload = InvokeRequest {
            input_text: prompt,
            text_generation_config: TextGenerationConfig {
                temperature: HOSTED_MODEL_POLICY.temperature,
                max_token_count: HOSTED_MODEL_POLICY.max_output_tokens,
            },
        };
        let body = serde_json::to_vec(&payload)
            .map_err(|e| AppError::config_error(format!("Failed to encode Bedrock request: {}", e)))?;

        let mut request = self
            .client
            .post(self.invoke_url.clone())
            .header(CONTENT_TYPE, JSON)
            .header("accept", JSON);

        match &self.auth {
            AwsAuth::Bearer(token) => request = request.bearer_auth(token),
            AwsAuth::SigV4(credentials) => {
                for (name, value) in self.signature_headers(credentials, &body)? {
                    request = request.header(name, value);
                }
            }
        }

        let response = http::send(self.kind(), self.timeout, request.body(body))?;

        CONTRACT.extract::<InvokeResponse, _>(&response, |envelope| {
            envelope.results.into_iter().next()?.output_text
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const INVOKE_PATH: &str = "/model/amazon.titan-text-express-v1/invoke";

    fn client_for(server: &Server, auth: AwsAuth) -> BedrockClient {
        let endpoint = Url::parse(&format!("{}/", server.url())).unwrap();
        BedrockClient::with_endpoint(&endpoint, "us-east-1", auth, Duration::from_secs(5)).unwrap()
    }

    fn sigv4_auth() -> AwsAuth {
        AwsAuth::SigV4(Credentials::new(
            "AKIDEXAMPLE",
            "secret",
            Some("session".to_string()),
            None,
            "test",
        ))
    }

    #[test]
    fn regional_endpoint_is_used_by_default() {
        let client = BedrockClient::new("eu-central-1", AwsAuth::Bearer("t".into()), Duration::from_secs(1))
            .unwrap();
        assert_eq!(
            client.invoke_url.as_str(),
            "https://bedrock-runtime.eu-central-1.amazonaws.com/model/amazon.titan-text-express-v1/invoke"
        );
    }

    #[test]
    fn signed_invoke_reads_first_result() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", INVOKE_PATH)
            .match_header(
                "authorization",
                Matcher::Regex(
                    r"^AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/\d{8}/us-east-1/bedrock/aws4_request, SignedHeaders=[a-z0-9;-]*content-type;host;x-amz-date[a-z0-9;-]*, Signature=[0-9a-f]{64}$"
                        .into(),
                ),
            )
            .match_header("x-amz-date", Matcher::Regex(r"^\d{8}T\d{6}Z$".into()))
            .match_header("x-amz-security-token", "session")
            .match_body(Matcher::Json(serde_json::json!({
                "inputText": "describe",
                "textGenerationConfig": { "temperature": 0.2, "maxTokenCount": 800 }
            })))
            .with_status(200)
            .with_body(r#"{"inputTextTokenCount":3,"results":[{"tokenCount":4,"outputText":"FROM python:3.12-slim","completionReason":"FINISH"}]}"#)
            .create();

        let text = client_for(&server, sigv4_auth()).invoke("describe").unwrap();

        mock.assert();
        assert_eq!(text, "FROM python:3.12-slim");
    }

    #[test]
    fn bearer_token_is_sent_without_signature() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", INVOKE_PATH)
            .match_header("authorization", "Bearer bedrock-key")
            .match_header("x-amz-date", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"results":[{"outputText":"ok"}]}"#)
            .create();

        let text = client_for(&server, AwsAuth::Bearer("bedrock-key".into())).invoke("p").unwrap();

        mock.assert();
        assert_eq!(text, "ok");
    }

    #[test]
    fn missing_results_is_unexpected_shape() {
        let mut server = Server::new();
        let _mock = server.mock("POST", INVOKE_PATH).with_status(200).with_body(r#"{"results":[]}"#).create();

        let err = client_for(&server, sigv4_auth()).invoke("p").unwrap_err();
        assert!(err.to_string().contains("results[0].outputText per titan-text-v1"));
    }

    #[test]
    fn access_denied_uses_message_field() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", INVOKE_PATH)
            .with_status(403)
            .with_body(r#"{"message":"The security token included in the request is invalid."}"#)
            .create();

        let err = client_for(&server, sigv4_auth()).invoke("p").unwrap_err();
        assert!(matches!(
            err,
            AppError::ProviderStatus { status: 403, ref provider, ref message }
                if provider == "bedrock" && message.starts_with("The security token")
        ));
    }
}
