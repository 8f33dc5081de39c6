//! Match dispositions produced by the upstream matcher.
//!
//! A [`TemplateMatch`] pairs a template with one disposition per criterion
//! the matcher checked. The [`Candidate`] answers the resolver needs are
//! derived from those dispositions.

use serde::{Deserialize, Serialize};

use super::{Candidate, TemplateInfo};

/// The criterion a disposition refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Name,
    ShortName,
    Author,
    Classification,
    /// The language the user asked for on the command line.
    Language,
    /// The language configured as the host default.
    DefaultLanguage,
    Type,
    Baseline,
    /// A template parameter, by parameter name.
    Parameter(String),
}

impl MatchField {
    /// Whether the field identifies the template being asked for.
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name | Self::ShortName)
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::ShortName => write!(f, "short name"),
            Self::Author => write!(f, "author"),
            Self::Classification => write!(f, "classification"),
            Self::Language => write!(f, "language"),
            Self::DefaultLanguage => write!(f, "default language"),
            Self::Type => write!(f, "type"),
            Self::Baseline => write!(f, "baseline"),
            Self::Parameter(name) => write!(f, "parameter '{name}'"),
        }
    }
}

/// How well a criterion matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    Exact,
    Partial,
    Mismatch,
    /// The value is not one the template accepts.
    InvalidValue,
    /// The value is a prefix of several accepted values.
    AmbiguousValue,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Partial => write!(f, "partial"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::AmbiguousValue => write!(f, "ambiguous value"),
        }
    }
}

/// The outcome of checking one criterion against one template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchDisposition {
    pub field: MatchField,
    pub kind: MatchKind,
}

impl MatchDisposition {
    pub const fn new(field: MatchField, kind: MatchKind) -> Self {
        Self { field, kind }
    }

    pub const fn exact(field: MatchField) -> Self {
        Self::new(field, MatchKind::Exact)
    }
}

/// A template together with the dispositions the matcher recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMatch {
    pub template: TemplateInfo,
    #[serde(default)]
    pub dispositions: Vec<MatchDisposition>,
}

impl TemplateMatch {
    pub const fn new(template: TemplateInfo) -> Self {
        Self {
            template,
            dispositions: Vec::new(),
        }
    }

    /// Record a disposition.
    #[must_use]
    pub fn with(mut self, field: MatchField, kind: MatchKind) -> Self {
        self.dispositions.push(MatchDisposition::new(field, kind));
        self
    }

    /// First disposition recorded for `field`, if any.
    pub fn disposition(&self, field: &MatchField) -> Option<MatchKind> {
        self.dispositions
            .iter()
            .find(|d| &d.field == field)
            .map(|d| d.kind)
    }

    /// Whether any disposition was recorded for `field`.
    pub fn has_disposition(&self, field: &MatchField) -> bool {
        self.disposition(field).is_some()
    }

    /// Dispositions that keep the template from being invoked.
    pub fn blocking_dispositions(&self) -> impl Iterator<Item = &MatchDisposition> {
        self.dispositions
            .iter()
            .filter(|d| !d.field.is_name() && d.field != MatchField::DefaultLanguage)
            .filter(|d| d.kind != MatchKind::Exact)
    }

    fn has_exact(&self, field: &MatchField) -> bool {
        self.dispositions
            .iter()
            .any(|d| &d.field == field && d.kind == MatchKind::Exact)
    }
}

impl Candidate for TemplateMatch {
    fn identity(&self) -> &str {
        &self.template.identity
    }

    fn name(&self) -> &str {
        self.template.display_name()
    }

    fn group_identity(&self) -> &str {
        &self.template.group_identity
    }

    fn language(&self) -> &str {
        &self.template.language
    }

    fn precedence(&self) -> i32 {
        self.template.precedence
    }

    // Partial name matches are listed but never invoked; every other
    // criterion the user supplied has to match exactly.
    fn is_invokable(&self) -> bool {
        let name_matched = self
            .dispositions
            .iter()
            .any(|d| d.field.is_name() && d.kind == MatchKind::Exact);
        name_matched && self.blocking_dispositions().next().is_none()
    }

    fn matches_default_language(&self) -> bool {
        self.has_exact(&MatchField::DefaultLanguage)
    }

    fn matches_user_language(&self) -> bool {
        self.has_exact(&MatchField::Language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> TemplateMatch {
        TemplateMatch::new(TemplateInfo::new("Acme.Console.CSharp", "Acme.Console"))
    }

    #[test]
    fn test_exact_short_name_is_invokable() {
        let m = console().with(MatchField::ShortName, MatchKind::Exact);
        assert!(m.is_invokable());
    }

    #[test]
    fn test_partial_name_only_is_not_invokable() {
        let m = console().with(MatchField::Name, MatchKind::Partial);
        assert!(!m.is_invokable());
    }

    #[test]
    fn test_no_dispositions_is_not_invokable() {
        assert!(!console().is_invokable());
    }

    #[test]
    fn test_partial_name_with_exact_short_name_is_invokable() {
        let m = console()
            .with(MatchField::Name, MatchKind::Partial)
            .with(MatchField::ShortName, MatchKind::Exact);
        assert!(m.is_invokable());
    }

    #[test]
    fn test_invalid_parameter_blocks_invocation() {
        let m = console()
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::Parameter("framework".into()), MatchKind::InvalidValue);

        assert!(!m.is_invokable());
        assert_eq!(m.blocking_dispositions().count(), 1);
    }

    #[test]
    fn test_language_mismatch_blocks_invocation() {
        let m = console()
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::Language, MatchKind::Mismatch);

        assert!(!m.is_invokable());
        assert!(!m.matches_user_language());
    }

    #[test]
    fn test_default_language_mismatch_does_not_block_invocation() {
        let m = console()
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::DefaultLanguage, MatchKind::Mismatch);

        assert!(m.is_invokable());
        assert!(!m.matches_default_language());
    }

    #[test]
    fn test_language_flags() {
        let m = console()
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::Language, MatchKind::Exact)
            .with(MatchField::DefaultLanguage, MatchKind::Exact);

        assert!(m.matches_user_language());
        assert!(m.matches_default_language());
    }

    #[test]
    fn test_disposition_wire_format() {
        let json = r#"{
            "template": {"identity": "Acme.Console.FSharp", "groupIdentity": "Acme.Console", "language": "F#"},
            "dispositions": [
                {"field": "shortName", "kind": "exact"},
                {"field": {"parameter": "framework"}, "kind": "ambiguousValue"}
            ]
        }"#;
        let m: TemplateMatch = serde_json::from_str(json).unwrap();

        assert_eq!(m.language(), "F#");
        assert_eq!(
            m.disposition(&MatchField::Parameter("framework".into())),
            Some(MatchKind::AmbiguousValue)
        );
        assert!(!m.is_invokable());
    }
}
