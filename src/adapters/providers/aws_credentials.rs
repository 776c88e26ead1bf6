//! Ambient AWS credentials for the Bedrock adapter.
//!
//! A Bedrock API key in `AWS_BEARER_TOKEN_BEDROCK` wins. Otherwise the AWS SDK
//! default provider chain is asked for signing credentials, which covers
//! environment keys, shared config profiles, SSO, web identity and instance roles.

use std::fmt;

use aws_config::Region;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::provider::error::CredentialsError;
use tracing::debug;

use crate::domain::{AppError, ProviderKind};
use crate::ports::EnvSource;

pub const AWS_BEARER_TOKEN_BEDROCK: &str = "AWS_BEARER_TOKEN_BEDROCK";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// How Bedrock requests are authenticated.
#[derive(Clone)]
pub enum AwsAuth {
    Bearer(String),
    SigV4(Credentials),
}

impl fmt::Debug for AwsAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwsAuth::Bearer(_) => f.write_str("Bearer([REDACTED])"),
            // `Credentials` redacts its own secrets.
            AwsAuth::SigV4(credentials) => f.debug_tuple("SigV4").field(credentials).finish(),
        }
    }
}

/// Find Bedrock credentials for `region`.
///
/// Nothing found anywhere is `MissingCredential`; a source that exists but
/// fails (a broken profile, an expired SSO session) is `InvalidCredential`.
pub fn discover<E>(env: &E, region: &str) -> Result<AwsAuth, AppError>
where
    E: EnvSource + ?Sized,
{
    if let Some(token) = env.non_blank(AWS_BEARER_TOKEN_BEDROCK) {
        debug!(source = AWS_BEARER_TOKEN_BEDROCK, "using AWS bearer token");
        return Ok(AwsAuth::Bearer(token));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::config_error(format!("Failed to start AWS credential lookup: {}", e)))?;
    let region_name = region.to_string();
    let region = Region::new(region_name.clone());

    let loaded = runtime.block_on(async move {
        let chain = DefaultCredentialsChain::builder().region(region).build().await;
        chain.provide_credentials().await
    });

    match loaded {
        Ok(credentials) => {
            debug!(region = %region_name, "using AWS SDK default chain credentials");
            Ok(AwsAuth::SigV4(credentials))
        }
        Err(CredentialsError::CredentialsNotLoaded(_)) => Err(missing()),
        Err(err) => Err(AppError::InvalidCredential {
            variable: "AWS credential provider chain".to_string(),
            reason: err.to_string(),
        }),
    }
}

fn missing() -> AppError {
    AppError::MissingCredential {
        provider: ProviderKind::HostedModelInvoke.name().to_string(),
        variables: [AWS_BEARER_TOKEN_BEDROCK, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY]
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
