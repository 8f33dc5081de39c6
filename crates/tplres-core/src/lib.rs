//! Core domain types and resolution logic for tplres.
//!
//! The crate answers one question: given templates that an upstream matcher
//! already scored against the user's input, which single template should be
//! invoked, and if none, why not.
//!
//! - [`domain`]: template metadata, match dispositions and the [`Candidate`]
//!   seam the resolver consumes
//! - [`resolution`]: grouping, group resolution, candidate resolution and the
//!   detailed-help selection, all memoized per [`TemplateResolver`]
//! - [`language`]: turns a requested or configured language into dispositions
//! - [`settings`]: user-configurable defaults

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod language;
pub mod resolution;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{Candidate, MatchDisposition, MatchField, MatchKind, TemplateInfo, TemplateMatch};
pub use language::annotate_languages;
pub use resolution::{
    GroupResolution, GroupResolutionStatus, Resolution, ResolutionStatus, TemplateGroup,
    TemplateResolver,
};
pub use settings::{
    DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_ENV, Settings, SettingsError, SettingsUpdate,
    validate_settings,
};

#[cfg(test)]
use serde_json as _;
