//! Language dispositions.
//!
//! The upstream matcher does not always know which language the user asked
//! for or which language the host prefers. [`annotate_languages`] fills in
//! the two language criteria so the resolver can use them as tie-breaks.

use crate::domain::{MatchDisposition, MatchField, MatchKind, TemplateMatch};
use crate::utils::text::eq_ignore_case;

/// Record `Language` and `DefaultLanguage` dispositions on each match.
///
/// A disposition is only added when the match has none for that field, so
/// dispositions supplied by the matcher always win. Language comparison
/// ignores case.
pub fn annotate_languages(
    matches: &mut [TemplateMatch],
    user_language: Option<&str>,
    default_language: Option<&str>,
) {
    for template_match in matches {
        if let Some(language) = user_language {
            annotate(template_match, MatchField::Language, language);
        }
        if let Some(language) = default_language {
            annotate(template_match, MatchField::DefaultLanguage, language);
        }
    }
}

fn annotate(template_match: &mut TemplateMatch, field: MatchField, language: &str) {
    if template_match.has_disposition(&field) {
        return;
    }
    let kind = if eq_ignore_case(&template_match.template.language, language) {
        MatchKind::Exact
    } else {
        MatchKind::Mismatch
    };
    template_match.dispositions.push(MatchDisposition::new(field, kind));
}
