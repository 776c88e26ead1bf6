//! Credential resolution from the process environment.
//!
//! Every provider kind reads a fixed set of variables. Missing required values are
//! reported all at once and no client is ever built for an incomplete configuration.

use url::Url;

use crate::domain::provider::DEFAULT_AWS_REGION;
use crate::domain::{AppError, ProviderConfig, ProviderKind, Settings};
use crate::ports::EnvSource;

pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_KEY: &str = "AZURE_OPENAI_KEY";
pub const AZURE_DEPLOYMENT_NAME: &str = "AZURE_DEPLOYMENT_NAME";
pub const AZURE_AI_ENDPOINT: &str = "AZURE_AI_ENDPOINT";
pub const AZURE_AI_TOKEN: &str = "AZURE_AI_TOKEN";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Environment variables a provider kind cannot run without.
pub fn required_variables(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::ChatCompletion => {
            &[AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_KEY, AZURE_DEPLOYMENT_NAME]
        }
        ProviderKind::RawInference => &[AZURE_AI_ENDPOINT, AZURE_AI_TOKEN],
        ProviderKind::GenerativeLanguage => &[GEMINI_API_KEY],
        ProviderKind::HostedModelInvoke | ProviderKind::LocalDaemon => &[],
    }
}

/// Resolve the configuration for `kind` from `env` and `settings`.
pub fn resolve<E>(
    kind: ProviderKind,
    settings: &Settings,
    env: &E,
) -> Result<ProviderConfig, AppError>
where
    E: EnvSource + ?Sized,
{
    match kind {
        ProviderKind::HostedModelInvoke => {
            let region = env
                .non_blank(AWS_REGION)
                .or_else(|| env.non_blank(AWS_DEFAULT_REGION))
                .or_else(|| settings.aws_region.clone())
                .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());
            Ok(ProviderConfig::HostedModelInvoke { region: region.trim().to_string() })
        }
        ProviderKind::ChatCompletion => {
            let [endpoint, api_key, deployment] =
                require(env, kind, [AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_KEY, AZURE_DEPLOYMENT_NAME])?;
            Ok(ProviderConfig::ChatCompletion {
                endpoint: parse_endpoint(AZURE_OPENAI_ENDPOINT, &endpoint)?,
                api_key,
                deployment: deployment.trim().to_string(),
            })
        }
        ProviderKind::RawInference => {
            let [endpoint, token] = require(env, kind, [AZURE_AI_ENDPOINT, AZURE_AI_TOKEN])?;
            Ok(ProviderConfig::RawInference {
                endpoint: parse_endpoint(AZURE_AI_ENDPOINT, &endpoint)?,
                token,
            })
        }
        ProviderKind::LocalDaemon => {
            Ok(ProviderConfig::LocalDaemon { base_url: settings.ollama_url.clone() })
        }
        ProviderKind::GenerativeLanguage => {
            let [api_key] = require(env, kind, [GEMINI_API_KEY])?;
            Ok(ProviderConfig::GenerativeLanguage { api_key })
        }
    }
}

fn require<E, const N: usize>(
    env: &E,
    kind: ProviderKind,
    names: [&str; N],
) -> Result<[String; N], AppError>
where
    E: EnvSource + ?Sized,
{
    let values = names.map(|name| env.non_blank(name));
    let missing: Vec<String> = names
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingCredential {
            provider: kind.name().to_string(),
            variables: missing,
        });
    }

    Ok(values.map(Option::unwrap_or_default))
}

fn parse_endpoint(variable: &str, raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim()).map_err(|e| AppError::InvalidCredential {
        variable: variable.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidCredential {
            variable: variable.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
