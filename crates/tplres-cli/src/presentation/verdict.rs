//! Mapping of resolution verdicts to user guidance and exit codes.

use serde::Serialize;
use tplres_core::{Candidate, GroupResolutionStatus, ResolutionStatus, TemplateResolver};

/// Exit code when no template matched.
pub const EXIT_NO_MATCH: i32 = 103;

/// Exit code when the input is ambiguous.
pub const EXIT_AMBIGUOUS: i32 = 104;

/// Exit code when a template matched but its options did not.
pub const EXIT_INVALID_PARAMETER: i32 = 127;

/// Exit code for a resolution verdict.
pub const fn exit_code(status: ResolutionStatus) -> i32 {
    match status {
        ResolutionStatus::SingleMatch => 0,
        ResolutionStatus::NoMatch => EXIT_NO_MATCH,
        ResolutionStatus::AmbiguousTemplateGroupChoice
        | ResolutionStatus::AmbiguousTemplateChoice
        | ResolutionStatus::AmbiguousLanguageChoice => EXIT_AMBIGUOUS,
        ResolutionStatus::InvalidParameter => EXIT_INVALID_PARAMETER,
    }
}

/// What the user should do next for a verdict.
pub const fn guidance(status: ResolutionStatus) -> &'static str {
    match status {
        ResolutionStatus::SingleMatch => "The template can be invoked.",
        ResolutionStatus::NoMatch => {
            "No templates match the input. Install a package that provides the template, \
             or check the name."
        }
        ResolutionStatus::AmbiguousTemplateGroupChoice => {
            "The input matches more than one template group. Use a more specific template \
             name."
        }
        ResolutionStatus::AmbiguousTemplateChoice => {
            "More than one template of the same group and language matches. Use more specific \
             parameter or choice values."
        }
        ResolutionStatus::AmbiguousLanguageChoice => {
            "The template is available in more than one language. Specify one with --language."
        }
        ResolutionStatus::InvalidParameter => {
            "The template was found but the supplied options are not valid for it. Fix the \
             option values."
        }
    }
}

/// Template fields shown in reports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub identity: String,
    pub name: String,
    pub group_identity: String,
    pub language: String,
    pub precedence: i32,
}

impl TemplateSummary {
    pub fn from_candidate<C: Candidate>(candidate: &C) -> Self {
        Self {
            identity: candidate.identity().to_string(),
            name: candidate.name().to_string(),
            group_identity: candidate.group_identity().to_string(),
            language: candidate.language().to_string(),
            precedence: candidate.precedence(),
        }
    }
}

/// Machine-readable outcome of `tplres resolve`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub status: ResolutionStatus,
    pub group_status: GroupResolutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_help: Option<Vec<TemplateSummary>>,
    pub guidance: &'static str,
    pub exit_code: i32,
}

impl ResolutionReport {
    /// Build a report, including the detailed-help selection when asked.
    pub fn from_resolver<C: Candidate>(resolver: &TemplateResolver<C>, detailed_help: bool) -> Self {
        let status = resolver.status();
        let detailed_help = detailed_help.then(|| {
            resolver
                .templates_for_detailed_help()
                .into_iter()
                .map(TemplateSummary::from_candidate)
                .collect::<Vec<_>>()
        });

        // Detailed help succeeds whenever there is something to describe.
        let exit_code = match &detailed_help {
            Some(shown) if !shown.is_empty() => 0,
            _ => exit_code(status),
        };

        Self {
            status,
            group_status: resolver.group_status(),
            group: resolver
                .unambiguous_group()
                .map(|group| group.identity().to_string()),
            template: resolver
                .template_to_invoke()
                .map(TemplateSummary::from_candidate),
            detailed_help,
            guidance: guidance(status),
            exit_code,
        }
    }
}
