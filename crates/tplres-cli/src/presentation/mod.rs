//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no resolution decisions
//! - Verdict-to-guidance mapping lives in [`verdict`]

pub mod tables;
pub mod verdict;

// Re-export commonly used items
pub use tables::{join_or_dash, print_separator, truncate_string};
pub use verdict::{ResolutionReport, TemplateSummary, exit_code, guidance};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_helpers_are_reexported() {
        assert_eq!(join_or_dash(&["cs"]), "cs");
        assert_eq!(truncate_string("console", 4), "c...");
    }
}
