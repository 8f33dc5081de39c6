//! The candidate seam between the upstream matcher and the resolver.

/// A pre-matched item eligible for final selection.
///
/// The resolver never mutates candidates; it only reads the answers below.
/// Implementations must return the same values on every call, otherwise the
/// memoized verdicts of a [`TemplateResolver`](crate::TemplateResolver) stop
/// describing the input.
pub trait Candidate {
    /// Unique identity of the template.
    fn identity(&self) -> &str;

    /// Human readable name.
    fn name(&self) -> &str;

    /// Identity shared by all variants of one logical template.
    ///
    /// An empty string means the candidate is ungrouped and forms a group of
    /// its own.
    fn group_identity(&self) -> &str;

    /// Language tag of the template (e.g. `C#`), empty when not applicable.
    fn language(&self) -> &str;

    /// Ranking within a group; higher wins.
    fn precedence(&self) -> i32;

    /// Whether the match was precise enough to invoke the template directly.
    fn is_invokable(&self) -> bool;

    /// Whether the template is written in the configured default language.
    fn matches_default_language(&self) -> bool;

    /// Whether the template is written in the language the user asked for.
    fn matches_user_language(&self) -> bool;
}

impl<C: Candidate + ?Sized> Candidate for &C {
    fn identity(&self) -> &str {
        (**self).identity()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn group_identity(&self) -> &str {
        (**self).group_identity()
    }

    fn language(&self) -> &str {
        (**self).language()
    }

    fn precedence(&self) -> i32 {
        (**self).precedence()
    }

    fn is_invokable(&self) -> bool {
        (**self).is_invokable()
    }

    fn matches_default_language(&self) -> bool {
        (**self).matches_default_language()
    }

    fn matches_user_language(&self) -> bool {
        (**self).matches_user_language()
    }
}
