//! Cloud providers a generated Terraform workflow can authenticate against.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Azure,
    Google,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Google];

    pub fn name(self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Google => "google",
        }
    }

    /// Secret names the generated workflow must expose as environment variables.
    pub fn credentials(self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY",
            CloudProvider::Azure => {
                "ARM_CLIENT_ID, ARM_CLIENT_SECRET, ARM_SUBSCRIPTION_ID, and ARM_TENANT_ID"
            }
            CloudProvider::Google => "GOOGLE_CREDENTIALS as JSON",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloudProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|cloud| cloud.name() == normalized)
            .ok_or_else(|| AppError::UnsupportedCloud(s.trim().to_string()))
    }
}
