//! Command handlers.
//!
//! Each handler returns the process exit code on success; failures are
//! `anyhow` errors that usually wrap a [`CliError`](crate::CliError).

pub mod contents;
pub mod groups;
pub mod resolve;

use crate::error::CliError;

/// Reject a blank `--language` value.
pub(crate) fn check_language(language: Option<&str>) -> Result<(), CliError> {
    if language.is_some_and(|l| l.trim().is_empty()) {
        return Err(CliError::Arguments("--language cannot be empty".to_string()));
    }
    Ok(())
}
