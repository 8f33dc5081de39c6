//! Template resolution.
//!
//! Resolution runs in two phases over one immutable candidate snapshot:
//!
//! 1. Candidates are partitioned into template groups by group identity and
//!    one group is chosen ([`GroupResolution`]).
//! 2. Within that group one invokable template is chosen by precedence and
//!    language preference ([`Resolution`]).
//!
//! Every outcome other than a single match is an ordinary verdict value that
//! the caller turns into guidance. Nothing here performs I/O.

mod group;
mod help;
mod resolver;
mod verdict;

pub use group::TemplateGroup;
pub use resolver::TemplateResolver;
pub use verdict::{GroupResolution, GroupResolutionStatus, Resolution, ResolutionStatus};
