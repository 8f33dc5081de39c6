//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Adapters
//! decide where values come from; [`Settings::from_lookup`] only needs a way
//! to read a variable by name.

use serde::{Deserialize, Serialize};

/// Language preferred when the user does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "C#";

/// Environment variable overriding the default language.
pub const DEFAULT_LANGUAGE_ENV: &str = "TPLRES_DEFAULT_LANGUAGE";

/// Application settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Language used to break ties when the user names none.
    pub default_language: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            default_language: Some(DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Build settings from defaults plus variables returned by `lookup`.
    ///
    /// An empty `TPLRES_DEFAULT_LANGUAGE` disables the default language.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::with_defaults();
        if let Some(value) = lookup(DEFAULT_LANGUAGE_ENV) {
            let value = value.trim();
            let language = (!value.is_empty()).then(|| value.to_string());
            settings.merge(&SettingsUpdate {
                default_language: Some(language),
            });
        }
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// The default language, if one is configured.
    pub fn effective_default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Merge an update into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref language) = other.default_language {
            self.default_language.clone_from(language);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = clear the field
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub default_language: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Default language cannot be empty")]
    EmptyLanguage,

    #[error("Default language must not contain whitespace, got '{0}'")]
    InvalidLanguage(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(language) = &settings.default_language {
        if language.is_empty() {
            return Err(SettingsError::EmptyLanguage);
        }
        if language.chars().any(char::is_whitespace) {
            return Err(SettingsError::InvalidLanguage(language.clone()));
        }
    }
    Ok(())
}
