pub mod commit;
pub mod docker_ci;
pub mod dockerfile;
pub mod save;
pub mod terraform_ci;

use crate::domain::AppError;

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_DIR: &str = ".";

/// Trimmed value, or `default` when blank.
fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { default.to_string() } else { trimmed.to_string() }
}

/// Trimmed value, rejecting blanks.
fn required(value: &str, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}
