//! Partitioning candidates into template groups.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::Candidate;
use crate::utils::text::{eq_ignore_case, fold_case};

/// Members of one group, as indices into the resolver's candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupSlot {
    /// Group identity as spelled by the first member; empty when ungrouped.
    pub(crate) identity: String,
    pub(crate) members: Vec<usize>,
}

/// Partition candidates by group identity, ignoring case.
///
/// Groups appear in the order their identity is first seen and members keep
/// input order. Candidates without a group identity each get their own
/// group.
pub(crate) fn partition<C: Candidate>(candidates: &[C]) -> Vec<GroupSlot> {
    let mut slots: Vec<GroupSlot> = Vec::new();
    let mut by_identity: HashMap<String, usize> = HashMap::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let identity = candidate.group_identity();
        if identity.is_empty() {
            slots.push(GroupSlot {
                identity: String::new(),
                members: vec![index],
            });
            continue;
        }

        match by_identity.entry(fold_case(identity)) {
            Entry::Occupied(slot) => slots[*slot.get()].members.push(index),
            Entry::Vacant(slot) => {
                slot.insert(slots.len());
                slots.push(GroupSlot {
                    identity: identity.to_string(),
                    members: vec![index],
                });
            }
        }
    }

    slots
}

/// A borrowed view of one template group.
pub struct TemplateGroup<'a, C> {
    candidates: &'a [C],
    slot: &'a GroupSlot,
}

impl<C> Clone for TemplateGroup<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for TemplateGroup<'_, C> {}

impl<C: std::fmt::Debug> std::fmt::Debug for TemplateGroup<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateGroup")
            .field("identity", &self.slot.identity)
            .field("members", &self.slot.members)
            .finish()
    }
}

impl<'a, C: Candidate> TemplateGroup<'a, C> {
    pub(crate) const fn new(candidates: &'a [C], slot: &'a GroupSlot) -> Self {
        Self { candidates, slot }
    }

    /// The shared group identity; empty for an ungrouped template.
    pub fn identity(&self) -> &'a str {
        &self.slot.identity
    }

    pub fn is_ungrouped(&self) -> bool {
        self.slot.identity.is_empty()
    }

    /// Number of templates in the group.
    pub fn len(&self) -> usize {
        self.slot.members.len()
    }

    /// Groups always have at least one member.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All templates of the group, in input order.
    pub fn templates(&self) -> impl Iterator<Item = &'a C> + use<'a, C> {
        let candidates = self.candidates;
        self.slot.members.iter().map(move |&i| &candidates[i])
    }

    /// Templates of the group that can be invoked.
    pub fn invokable_templates(&self) -> impl Iterator<Item = &'a C> + use<'a, C> {
        self.templates().filter(|c| c.is_invokable())
    }

    pub fn has_invokable_templates(&self) -> bool {
        self.invokable_templates().next().is_some()
    }

    /// Whether any template of the group is in the default language.
    pub fn has_default_language_match(&self) -> bool {
        self.templates().any(Candidate::matches_default_language)
    }

    /// Distinct non-empty languages of the group, ignoring case.
    pub fn languages(&self) -> Vec<&'a str> {
        let mut languages: Vec<&'a str> = Vec::new();
        for language in self.templates().map(Candidate::language) {
            if !language.is_empty() && !languages.iter().any(|l| eq_ignore_case(l, language)) {
                languages.push(language);
            }
        }
        languages
    }

    /// Invokable templates sharing the highest precedence.
    ///
    /// With `prefer_default_language`, the set narrows to the templates in
    /// the default language when at least one of them is present.
    pub fn highest_precedence_invokable(&self, prefer_default_language: bool) -> Vec<&'a C> {
        self.highest_precedence_indices(prefer_default_language)
            .into_iter()
            .map(|i| &self.candidates[i])
            .collect()
    }

    pub(crate) fn invokable_indices(&self) -> Vec<usize> {
        self.slot
            .members
            .iter()
            .copied()
            .filter(|&i| self.candidates[i].is_invokable())
            .collect()
    }

    /// Indices of the invokable templates sharing the highest precedence.
    ///
    /// Default-language narrowing keeps every default-language template, not
    /// only a sole winner; callers count languages over the narrowed set.
    pub(crate) fn highest_precedence_indices(&self, prefer_default_language: bool) -> Vec<usize> {
        let invokable = self.invokable_indices();
        let Some(highest) = invokable
            .iter()
            .map(|&i| self.candidates[i].precedence())
            .max()
        else {
            return Vec::new();
        };

        let top: Vec<usize> = invokable
            .into_iter()
            .filter(|&i| self.candidates[i].precedence() == highest)
            .collect();

        if prefer_default_language {
            let preferred: Vec<usize> = top
                .iter()
                .copied()
                .filter(|&i| self.candidates[i].matches_default_language())
                .collect();
            if !preferred.is_empty() {
                return preferred;
            }
        }

        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchField, MatchKind, TemplateInfo, TemplateMatch};

    fn template(identity: &str, group: &str) -> TemplateMatch {
        TemplateMatch::new(TemplateInfo::new(identity, group))
            .with(MatchField::ShortName, MatchKind::Exact)
    }

    #[test]
    fn test_partition_ignores_case() {
        let candidates = vec![
            template("a", "Acme.Console"),
            template("b", "acme.console"),
            template("c", "Acme.Web"),
        ];

        let slots = partition(&candidates);

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].identity, "Acme.Console");
        assert_eq!(slots[0].members, vec![0, 1]);
        assert_eq!(slots[1].members, vec![2]);
    }

    #[test]
    fn test_partition_keeps_ungrouped_apart() {
        let candidates = vec![template("a", ""), template("b", ""), template("c", "g")];

        let slots = partition(&candidates);

        assert_eq!(slots.len(), 3);
        assert!(slots[0].identity.is_empty());
        assert_eq!(slots[0].members, vec![0]);
        assert_eq!(slots[1].members, vec![1]);
    }

    #[test]
    fn test_partition_empty() {
        let candidates: Vec<TemplateMatch> = Vec::new();
        assert!(partition(&candidates).is_empty());
    }

    #[test]
    fn test_highest_precedence_prefers_default_language() {
        let candidates = vec![
            TemplateMatch::new(
                TemplateInfo::new("cs", "g").with_language("C#").with_precedence(10),
            )
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::DefaultLanguage, MatchKind::Exact),
            TemplateMatch::new(
                TemplateInfo::new("fs", "g").with_language("F#").with_precedence(10),
            )
            .with(MatchField::ShortName, MatchKind::Exact)
            .with(MatchField::DefaultLanguage, MatchKind::Mismatch),
            TemplateMatch::new(TemplateInfo::new("old", "g").with_precedence(1))
                .with(MatchField::ShortName, MatchKind::Exact),
        ];
        let slots = partition(&candidates);
        let group = TemplateGroup::new(&candidates, &slots[0]);

        let preferred = group.highest_precedence_invokable(true);
        assert_eq!(preferred.len(), 1);
        assert_eq!(preferred[0].identity(), "cs");

        let all_top = group.highest_precedence_invokable(false);
        assert_eq!(all_top.len(), 2);

        assert_eq!(group.languages(), vec!["C#", "F#"]);
    }

    #[test]
    fn test_has_invokable_templates() {
        let candidates = vec![
            TemplateMatch::new(TemplateInfo::new("partial", "g"))
                .with(MatchField::Name, MatchKind::Partial),
            template("exact", "h"),
        ];
        let slots = partition(&candidates);

        let partial = TemplateGroup::new(&candidates, &slots[0]);
        assert!(!partial.has_invokable_templates());
        assert_eq!(partial.invokable_templates().count(), 0);

        let exact = TemplateGroup::new(&candidates, &slots[1]);
        assert!(exact.has_invokable_templates());
    }
}
