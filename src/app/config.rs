//! Settings loading and provider/timeout precedence.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::domain::{AppError, ProviderKind, SETTINGS_FILE, Settings, parse_settings_content};
use crate::ports::EnvSource;

pub const PROVIDER_ENV: &str = "INFRAGEN_PROVIDER";

/// Load settings from `explicit` (which must exist) or from `infragen.toml`
/// in `work_dir` when present.
pub fn load_settings(explicit: Option<&Path>, work_dir: &Path) -> Result<Settings, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (work_dir.join(SETTINGS_FILE), false),
    };

    if !path.is_file() {
        if required {
            return Err(AppError::InvalidConfig(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Settings::default());
    }

    debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}

/// `--provider` > `INFRAGEN_PROVIDER` > config file > local daemon.
pub fn select_provider<E>(
    cli: Option<&str>,
    env: &E,
    settings: &Settings,
) -> Result<ProviderKind, AppError>
where
    E: EnvSource + ?Sized,
{
    if let Some(name) = cli {
        return name.parse();
    }
    if let Some(name) = env.non_blank(PROVIDER_ENV) {
        return name.parse();
    }
    Ok(settings.provider_kind())
}

/// `--timeout` > config file > 60 seconds.
pub fn select_timeout(cli: Option<u64>, settings: &Settings) -> Result<Duration, AppError> {
    let secs = cli.unwrap_or(settings.timeout_secs);
    if secs == 0 {
        return Err(AppError::InvalidConfig("timeout must be greater than 0".to_string()));
    }
    Ok(Duration::from_secs(secs))
}
