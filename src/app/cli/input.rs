//! Interactive parameter collection.
//!
//! `None` means the operator interrupted the prompt.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::{AppError, GeneratedArtifact};

pub(super) fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Flag value, or a prompt that falls back to `default` on blank input.
pub(super) fn or_prompt(
    value: Option<String>,
    label: &str,
    default: &str,
) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }

    let answer = Input::<String>::new()
        .with_prompt(label)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text();

    match answer {
        Ok(value) if value.trim().is_empty() => Ok(Some(default.to_string())),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", label, err))),
    }
}

/// Flag value, or a prompt repeated until a non-blank answer is given.
pub(super) fn required_or_prompt(
    value: Option<String>,
    label: &str,
) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }

    loop {
        match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
            Ok(value) if value.trim().is_empty() => {
                eprintln!("{} is required.", label);
            }
            Ok(value) => return Ok(Some(value.trim().to_string())),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(None);
            }
            Err(err) => {
                return Err(AppError::Validation(format!("Failed to read {}: {}", label, err)));
            }
        }
    }
}

pub(super) fn confirm_save(generated: &GeneratedArtifact) -> Result<bool, AppError> {
    let file_name = match generated.artifact.file_name() {
        Some(name) => name,
        None => return Ok(false),
    };

    Confirm::new()
        .with_prompt(format!("Save as {}?", file_name))
        .default(true)
        .interact_opt()
        .map(|answer| answer.unwrap_or(false))
        .map_err(|err| AppError::Validation(format!("Failed to read confirmation: {}", err)))
}
