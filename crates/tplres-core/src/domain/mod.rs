//! Domain types for template resolution.
//!
//! These are pure data types with no I/O. The upstream matcher produces
//! [`TemplateMatch`] values; the resolver only sees them through the
//! [`Candidate`] trait.

mod candidate;
mod matching;
mod template;

pub use candidate::Candidate;
pub use matching::{MatchDisposition, MatchField, MatchKind, TemplateMatch};
pub use template::TemplateInfo;
