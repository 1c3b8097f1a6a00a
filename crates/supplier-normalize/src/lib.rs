//! Organisation-name normalization.
//!
//! [`normalize`] maps a noisy supplier or registry name to a canonical,
//! upper-case, single-spaced form through an ordered list of rewrite steps.
//! [`count_organisations`] flags supplier strings that list several
//! organisations so they can be kept out of registry matching.

pub mod abbreviation;
pub mod cleanup;
pub mod multiplicity;
pub mod normalizer;
pub mod rule;
pub mod steps;
pub mod tables;

pub use abbreviation::{collapse_abbreviations, strip_unprintable};
pub use cleanup::clean_name;
pub use multiplicity::{MIN_FRAGMENT_LEN, count_organisations};
pub use normalizer::{Normalizer, normalize};
pub use rule::{ReplacementTable, Rewrite, RewriteStep, Stage, StepExecutor, StepMetadata};
