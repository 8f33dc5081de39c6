//! CLI bootstrap - the composition root.
//!
//! Settings are assembled here from the environment (including `.env`) and
//! command-line overrides; handlers only see the resulting [`CliConfig`].

use tplres_core::{Settings, SettingsUpdate, validate_settings};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Load settings from the environment, then apply overrides.
    pub fn load(default_language: Option<&str>) -> Result<Self, CliError> {
        Self::from_settings(Settings::from_env()?, default_language)
    }

    /// Apply command-line overrides to already loaded settings.
    pub fn from_settings(
        mut settings: Settings,
        default_language: Option<&str>,
    ) -> Result<Self, CliError> {
        if let Some(language) = default_language {
            settings.merge(&SettingsUpdate {
                default_language: Some(Some(language.to_string())),
            });
            validate_settings(&settings)?;
        }
        tracing::debug!(
            default_language = settings.effective_default_language(),
            "Loaded settings"
        );
        Ok(Self { settings })
    }

    pub fn default_language(&self) -> Option<&str> {
        self.settings.effective_default_language()
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output stays pipeable. `RUST_LOG` applies
/// unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
