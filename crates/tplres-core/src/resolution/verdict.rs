//! Resolution verdicts.
//!
//! Verdicts carry a payload only on success, so a `SingleMatch` without a
//! selected group or template cannot be constructed. The payload-free
//! `*Status` enums mirror them for presentation and serialization.

use serde::{Deserialize, Serialize};

/// Outcome of choosing a template group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupResolution<G> {
    /// No candidates at all.
    NoMatch,
    /// Exactly one group was selected.
    SingleMatch(G),
    /// Several groups remain and none could be preferred.
    Ambiguous,
}

impl<G> GroupResolution<G> {
    pub fn map<U>(self, f: impl FnOnce(G) -> U) -> GroupResolution<U> {
        match self {
            Self::NoMatch => GroupResolution::NoMatch,
            Self::SingleMatch(group) => GroupResolution::SingleMatch(f(group)),
            Self::Ambiguous => GroupResolution::Ambiguous,
        }
    }

    /// The selected group, if any.
    pub fn single(self) -> Option<G> {
        match self {
            Self::SingleMatch(group) => Some(group),
            Self::NoMatch | Self::Ambiguous => None,
        }
    }

    pub const fn status(&self) -> GroupResolutionStatus {
        match self {
            Self::NoMatch => GroupResolutionStatus::NoMatch,
            Self::SingleMatch(_) => GroupResolutionStatus::SingleMatch,
            Self::Ambiguous => GroupResolutionStatus::Ambiguous,
        }
    }
}

/// Payload-free form of [`GroupResolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupResolutionStatus {
    NoMatch,
    SingleMatch,
    Ambiguous,
}

impl std::fmt::Display for GroupResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no match"),
            Self::SingleMatch => write!(f, "single match"),
            Self::Ambiguous => write!(f, "ambiguous"),
        }
    }
}

/// Outcome of choosing the template to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    /// No template matched the input.
    NoMatch,
    /// Exactly one template can be invoked.
    SingleMatch(T),
    /// Several template groups matched.
    AmbiguousTemplateGroupChoice,
    /// Several templates of one group and one language remain.
    AmbiguousTemplateChoice,
    /// Several templates of one group remain and they differ by language.
    AmbiguousLanguageChoice,
    /// A group matched but no member accepted the supplied criteria.
    InvalidParameter,
}

impl<T> Resolution<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::NoMatch => Resolution::NoMatch,
            Self::SingleMatch(template) => Resolution::SingleMatch(f(template)),
            Self::AmbiguousTemplateGroupChoice => Resolution::AmbiguousTemplateGroupChoice,
            Self::AmbiguousTemplateChoice => Resolution::AmbiguousTemplateChoice,
            Self::AmbiguousLanguageChoice => Resolution::AmbiguousLanguageChoice,
            Self::InvalidParameter => Resolution::InvalidParameter,
        }
    }

    /// The template to invoke, if one was chosen.
    pub fn single(self) -> Option<T> {
        match self {
            Self::SingleMatch(template) => Some(template),
            _ => None,
        }
    }

    pub const fn status(&self) -> ResolutionStatus {
        match self {
            Self::NoMatch => ResolutionStatus::NoMatch,
            Self::SingleMatch(_) => ResolutionStatus::SingleMatch,
            Self::AmbiguousTemplateGroupChoice => ResolutionStatus::AmbiguousTemplateGroupChoice,
            Self::AmbiguousTemplateChoice => ResolutionStatus::AmbiguousTemplateChoice,
            Self::AmbiguousLanguageChoice => ResolutionStatus::AmbiguousLanguageChoice,
            Self::InvalidParameter => ResolutionStatus::InvalidParameter,
        }
    }
}

/// Payload-free form of [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    NoMatch,
    SingleMatch,
    AmbiguousTemplateGroupChoice,
    AmbiguousTemplateChoice,
    AmbiguousLanguageChoice,
    InvalidParameter,
}

impl std::fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no match"),
            Self::SingleMatch => write!(f, "single match"),
            Self::AmbiguousTemplateGroupChoice => write!(f, "ambiguous template group"),
            Self::AmbiguousTemplateChoice => write!(f, "ambiguous template"),
            Self::AmbiguousLanguageChoice => write!(f, "ambiguous language"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}
