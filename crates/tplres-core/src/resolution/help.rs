//! Selection of the templates shown for detailed help.
//!
//! Detailed help describes one group rather than invoking it. The selection
//! is independent of the invocation verdict: a group can be ambiguous to
//! invoke and still have a well defined set of templates to describe.

use crate::domain::Candidate;
use crate::utils::text::eq_ignore_case;

use super::group::TemplateGroup;

/// Indices of the invokable templates of `group` to show for detailed help.
///
/// Returns an empty list when the group has no invokable templates, or when
/// neither the user nor the default language decides between templates of
/// different languages.
pub(crate) fn detailed_help_indices<C: Candidate>(
    candidates: &[C],
    group: &TemplateGroup<'_, C>,
    has_user_language: bool,
) -> Vec<usize> {
    if !group.has_invokable_templates() {
        return Vec::new();
    }
    let invokable = group.invokable_indices();

    if has_user_language {
        return invokable
            .into_iter()
            .filter(|&i| candidates[i].matches_user_language())
            .collect();
    }

    let default_language: Vec<usize> = invokable
        .iter()
        .copied()
        .filter(|&i| candidates[i].matches_default_language())
        .collect();
    if !default_language.is_empty() {
        return default_language;
    }

    if has_conflicting_languages(invokable.iter().map(|&i| candidates[i].language())) {
        return Vec::new();
    }

    invokable
}

/// Whether more than one distinct non-empty language appears.
///
/// Stops at the second distinct language.
pub(crate) fn has_conflicting_languages<'a>(languages: impl IntoIterator<Item = &'a str>) -> bool {
    let mut first: Option<&str> = None;
    for language in languages {
        if language.is_empty() {
            continue;
        }
        match first {
            None => first = Some(language),
            Some(seen) if !eq_ignore_case(seen, language) => return true,
            Some(_) => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_language_does_not_conflict() {
        assert!(!has_conflicting_languages(["C#", "c#", ""]));
        assert!(!has_conflicting_languages(["", ""]));
        assert!(!has_conflicting_languages(std::iter::empty()));
    }

    #[test]
    fn test_two_languages_conflict() {
        assert!(has_conflicting_languages(["", "C#", "F#"]));
    }

    #[test]
    fn test_conflict_short_circuits() {
        let mut inspected = 0;
        let languages = ["C#", "F#", "VB", "C#"].into_iter().inspect(|_| inspected += 1);

        assert!(has_conflicting_languages(languages));
        assert_eq!(inspected, 2);
    }
}
