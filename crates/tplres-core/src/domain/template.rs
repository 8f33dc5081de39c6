//! Installed template metadata.

use serde::{Deserialize, Serialize};

/// Metadata of one installed template.
///
/// This is the subset of template information that resolution and its
/// presentation need. Everything else (parameters, sources, post actions)
/// stays with the template engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateInfo {
    /// Unique identity, e.g. `Acme.Console.CSharp.8.0`.
    pub identity: String,

    /// Identity shared by the language/version variants of one template.
    pub group_identity: String,

    /// Display name.
    pub name: String,

    /// Short names the template can be invoked by.
    pub short_names: Vec<String>,

    /// Template author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Language tag, empty when the template is language agnostic.
    pub language: String,

    /// Ranking within a group; higher wins.
    pub precedence: i32,

    /// Optional description shown in help output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TemplateInfo {
    /// Create template info with the fields resolution depends on.
    pub fn new(identity: impl Into<String>, group_identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            group_identity: group_identity.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a short name.
    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_names.push(short_name.into());
        self
    }

    /// Set the language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the precedence.
    #[must_use]
    pub fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = precedence;
        self
    }

    /// The name to show for this template, falling back to its identity.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.identity
        } else {
            &self.name
        }
    }
}
