//! Locale-independent string comparison.
//!
//! Identities and language tags compare ordinally, ignoring case. Case
//! folding uses Unicode lowercase mapping and never the host locale, so the
//! same input groups the same way on every platform.

/// Fold a string for case-insensitive keys.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Compare two strings ordinally, ignoring case.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left.to_lowercase() == right.to_lowercase()
}

/// Count distinct values, ignoring case.
pub fn count_distinct_ignore_case<'a>(values: impl IntoIterator<Item = &'a str>) -> usize {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        let folded = fold_case(value);
        if !seen.contains(&folded) {
            seen.push(folded);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("C#", "c#"));
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(!eq_ignore_case("F#", "C#"));
    }

    #[test]
    fn test_count_distinct_ignore_case() {
        assert_eq!(count_distinct_ignore_case(["C#", "c#", "F#"]), 2);
        assert_eq!(count_distinct_ignore_case(["", ""]), 1);
        assert_eq!(count_distinct_ignore_case(std::iter::empty()), 0);
    }
}
