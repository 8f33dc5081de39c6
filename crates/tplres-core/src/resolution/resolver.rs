//! The memoizing template resolver.

use once_cell::sync::OnceCell;

use crate::domain::Candidate;
use crate::utils::text::count_distinct_ignore_case;

use super::group::{GroupSlot, TemplateGroup, partition};
use super::help::detailed_help_indices;
use super::verdict::{GroupResolution, GroupResolutionStatus, Resolution, ResolutionStatus};

/// Decides which template, if any, to invoke for one resolution attempt.
///
/// Construct one resolver per attempt. Groups, verdicts and the detailed-help
/// selection are computed on first access and cached; later reads return the
/// cached values. The resolver is `Sync` whenever `C` is, and concurrent
/// first reads agree on a single cached value.
///
/// # Example
///
/// ```rust
/// use tplres_core::{MatchField, MatchKind, ResolutionStatus, TemplateInfo, TemplateMatch, TemplateResolver};
///
/// let console = TemplateMatch::new(TemplateInfo::new("Acme.Console.CSharp", "Acme.Console"))
///     .with(MatchField::ShortName, MatchKind::Exact);
///
/// let resolver = TemplateResolver::new(vec![console], None);
/// assert_eq!(resolver.status(), ResolutionStatus::SingleMatch);
/// assert_eq!(resolver.template_to_invoke().unwrap().template.identity, "Acme.Console.CSharp");
/// ```
#[derive(Debug)]
pub struct TemplateResolver<C> {
    candidates: Vec<C>,
    user_language: Option<String>,
    groups: OnceCell<Vec<GroupSlot>>,
    group_resolution: OnceCell<GroupResolution<usize>>,
    resolution: OnceCell<Resolution<usize>>,
    detailed_help: OnceCell<Vec<usize>>,
}

impl<C: Candidate> TemplateResolver<C> {
    /// Create a resolver over pre-matched candidates.
    ///
    /// `user_language` is the language the user asked for explicitly, if
    /// any. When present, the default language is never used to break ties.
    pub fn new(candidates: Vec<C>, user_language: Option<String>) -> Self {
        Self {
            candidates,
            user_language,
            groups: OnceCell::new(),
            group_resolution: OnceCell::new(),
            resolution: OnceCell::new(),
            detailed_help: OnceCell::new(),
        }
    }

    /// All candidates, in input order.
    pub fn candidates(&self) -> &[C] {
        &self.candidates
    }

    pub fn user_language(&self) -> Option<&str> {
        self.user_language.as_deref()
    }

    pub const fn has_user_language(&self) -> bool {
        self.user_language.is_some()
    }

    /// Candidates partitioned into template groups.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = TemplateGroup<'_, C>> {
        self.group_slots()
            .iter()
            .map(|slot| TemplateGroup::new(&self.candidates, slot))
    }

    /// The group verdict, with the selected group on success.
    pub fn group_resolution(&self) -> GroupResolution<TemplateGroup<'_, C>> {
        self.resolved_group().map(|index| self.group_at(index))
    }

    pub fn group_status(&self) -> GroupResolutionStatus {
        self.resolved_group().status()
    }

    /// The selected group, if group resolution found exactly one.
    pub fn unambiguous_group(&self) -> Option<TemplateGroup<'_, C>> {
        self.group_resolution().single()
    }

    /// The invocation verdict, with the chosen template on success.
    pub fn resolution(&self) -> Resolution<&C> {
        self.resolved_template().map(|index| &self.candidates[index])
    }

    pub fn status(&self) -> ResolutionStatus {
        self.resolved_template().status()
    }

    /// The template to invoke; present exactly when the status is
    /// [`ResolutionStatus::SingleMatch`].
    pub fn template_to_invoke(&self) -> Option<&C> {
        self.resolution().single()
    }

    /// Templates to describe when the user asks for detailed help.
    pub fn templates_for_detailed_help(&self) -> Vec<&C> {
        self.detailed_help
            .get_or_init(|| self.evaluate_detailed_help())
            .iter()
            .map(|&index| &self.candidates[index])
            .collect()
    }

    fn group_slots(&self) -> &[GroupSlot] {
        self.groups.get_or_init(|| {
            let groups = partition(&self.candidates);
            tracing::debug!(
                candidates = self.candidates.len(),
                groups = groups.len(),
                "Partitioned candidates into template groups"
            );
            groups
        })
    }

    fn group_at(&self, index: usize) -> TemplateGroup<'_, C> {
        TemplateGroup::new(&self.candidates, &self.group_slots()[index])
    }

    fn resolved_group(&self) -> GroupResolution<usize> {
        *self
            .group_resolution
            .get_or_init(|| self.evaluate_group_resolution())
    }

    fn resolved_template(&self) -> Resolution<usize> {
        *self.resolution.get_or_init(|| self.evaluate_resolution())
    }

    fn evaluate_group_resolution(&self) -> GroupResolution<usize> {
        let groups = self.group_slots();
        let verdict = match groups.len() {
            0 => GroupResolution::NoMatch,
            1 => GroupResolution::SingleMatch(0),
            _ if self.has_user_language() => GroupResolution::Ambiguous,
            _ => {
                // The default language only decides when exactly one group has it.
                let mut preferred = (0..groups.len())
                    .filter(|&index| self.group_at(index).has_default_language_match());
                match (preferred.next(), preferred.next()) {
                    (Some(index), None) => GroupResolution::SingleMatch(index),
                    _ => GroupResolution::Ambiguous,
                }
            }
        };

        tracing::debug!(
            groups = groups.len(),
            user_language = self.user_language(),
            verdict = %verdict.status(),
            "Resolved template group"
        );
        verdict
    }

    fn evaluate_resolution(&self) -> Resolution<usize> {
        let group = match self.resolved_group() {
            GroupResolution::NoMatch => return Resolution::NoMatch,
            GroupResolution::Ambiguous => return Resolution::AmbiguousTemplateGroupChoice,
            GroupResolution::SingleMatch(index) => self.group_at(index),
        };

        let verdict = match group.invokable_indices().as_slice() {
            [] => Resolution::InvalidParameter,
            [only] => Resolution::SingleMatch(*only),
            _ => {
                let top = group.highest_precedence_indices(!self.has_user_language());
                match top.as_slice() {
                    [only] => Resolution::SingleMatch(*only),
                    _ => {
                        let languages = count_distinct_ignore_case(
                            top.iter().map(|&index| self.candidates[index].language()),
                        );
                        if languages > 1 {
                            Resolution::AmbiguousLanguageChoice
                        } else {
                            Resolution::AmbiguousTemplateChoice
                        }
                    }
                }
            }
        };

        tracing::debug!(
            group = group.identity(),
            templates = group.len(),
            verdict = %verdict.status(),
            "Resolved template to invoke"
        );
        verdict
    }

    fn evaluate_detailed_help(&self) -> Vec<usize> {
        let Some(index) = self.resolved_group().single() else {
            return Vec::new();
        };
        let group = self.group_at(index);
        detailed_help_indices(&self.candidates, &group, self.has_user_language())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchField, MatchKind, TemplateInfo, TemplateMatch};

    fn invokable(identity: &str, group: &str, language: &str, precedence: i32) -> TemplateMatch {
        TemplateMatch::new(
            TemplateInfo::new(identity, group)
                .with_language(language)
                .with_precedence(precedence),
        )
        .with(MatchField::ShortName, MatchKind::Exact)
    }

    #[test]
    fn test_empty_input_is_no_match() {
        let resolver = TemplateResolver::<TemplateMatch>::new(Vec::new(), None);

        assert_eq!(resolver.group_status(), GroupResolutionStatus::NoMatch);
        assert_eq!(resolver.status(), ResolutionStatus::NoMatch);
        assert!(resolver.template_to_invoke().is_none());
        assert!(resolver.templates_for_detailed_help().is_empty());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let resolver = TemplateResolver::new(
            vec![
                invokable("console.7", "console", "C#", 7),
                invokable("console.8", "console", "C#", 8),
            ],
            None,
        );

        assert_eq!(resolver.status(), ResolutionStatus::SingleMatch);
        assert_eq!(resolver.template_to_invoke().unwrap().identity(), "console.8");
    }

    #[test]
    fn test_user_language_disables_default_language_tie_break() {
        let cs = invokable("console.cs", "console", "C#", 1)
            .with(MatchField::Language, MatchKind::Exact)
            .with(MatchField::DefaultLanguage, MatchKind::Exact);
        let other = invokable("console.cs.alt", "console", "C#", 1)
            .with(MatchField::Language, MatchKind::Exact);

        let resolver = TemplateResolver::new(vec![cs, other], Some("C#".to_string()));

        assert_eq!(resolver.status(), ResolutionStatus::AmbiguousTemplateChoice);
    }

    #[test]
    fn test_ambiguous_groups_with_user_language() {
        let a = invokable("a", "console", "C#", 1).with(MatchField::DefaultLanguage, MatchKind::Exact);
        let b = invokable("b", "web", "C#", 1);

        let resolver = TemplateResolver::new(vec![a, b], Some("C#".to_string()));

        assert_eq!(resolver.group_status(), GroupResolutionStatus::Ambiguous);
        assert_eq!(
            resolver.status(),
            ResolutionStatus::AmbiguousTemplateGroupChoice
        );
        assert!(resolver.unambiguous_group().is_none());
    }

    #[test]
    fn test_two_default_language_groups_stay_ambiguous() {
        let a = invokable("a", "console", "C#", 1).with(MatchField::DefaultLanguage, MatchKind::Exact);
        let b = invokable("b", "web", "C#", 1).with(MatchField::DefaultLanguage, MatchKind::Exact);

        let resolver = TemplateResolver::new(vec![a, b], None);

        assert_eq!(resolver.group_status(), GroupResolutionStatus::Ambiguous);
    }

    #[test]
    fn test_language_comparison_ignores_case() {
        let resolver = TemplateResolver::new(
            vec![
                invokable("a", "console", "c#", 1),
                invokable("b", "console", "C#", 1),
            ],
            None,
        );

        assert_eq!(resolver.status(), ResolutionStatus::AmbiguousTemplateChoice);
    }

    #[test]
    fn test_detailed_help_prefers_default_language() {
        let cs = invokable("cs", "console", "C#", 1).with(MatchField::DefaultLanguage, MatchKind::Exact);
        let fs = invokable("fs", "console", "F#", 1);

        let resolver = TemplateResolver::new(vec![cs, fs], None);
        let shown: Vec<&str> = resolver
            .templates_for_detailed_help()
            .into_iter()
            .map(Candidate::identity)
            .collect();

        assert_eq!(shown, vec!["cs"]);
    }

    #[test]
    fn test_detailed_help_without_language_preference() {
        let resolver = TemplateResolver::new(
            vec![
                invokable("cs", "console", "C#", 1),
                invokable("fs", "console", "F#", 1),
            ],
            None,
        );
        assert!(resolver.templates_for_detailed_help().is_empty());

        let resolver = TemplateResolver::new(
            vec![
                invokable("cs.7", "console", "C#", 1),
                invokable("cs.8", "console", "", 2),
            ],
            None,
        );
        assert_eq!(resolver.templates_for_detailed_help().len(), 2);
    }

    #[test]
    fn test_detailed_help_requires_invokable_templates() {
        let partial = TemplateMatch::new(TemplateInfo::new("cs", "console"))
            .with(MatchField::Name, MatchKind::Partial);

        let resolver = TemplateResolver::new(vec![partial], None);

        assert_eq!(resolver.status(), ResolutionStatus::InvalidParameter);
        assert!(resolver.templates_for_detailed_help().is_empty());
    }

    #[test]
    fn test_resolver_over_borrowed_candidates() {
        let owned = vec![invokable("cs", "console", "C#", 1)];
        let resolver = TemplateResolver::new(owned.iter().collect(), None);

        assert_eq!(resolver.template_to_invoke().map(|c| c.identity()), Some("cs"));
    }
}
