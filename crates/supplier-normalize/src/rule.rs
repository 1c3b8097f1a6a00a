//! Rewrite-step infrastructure for name normalization.
//!
//! Normalization is an ordered list of steps. Each step sees the output of
//! the previous one, so the order of steps, and of rules inside a
//! replacement table, is part of the observable behavior.
//!
//! # Architecture
//!
//! - `RewriteStep` - Trait for an individual normalization step
//! - `StepMetadata` - Metadata about a step (ID, stage, description)
//! - `ReplacementTable` - A step applying literal substring rewrites in order
//! - `StepExecutor` - Executes a set of steps in order

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Normalization stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Upper-casing and backtick possessives.
    Possessive,
    /// Punctuation folded to spaces.
    Punctuation,
    /// Apostrophe and possessive-suffix removal.
    PossessiveSuffix,
    /// Whitespace collapsing and boundary padding.
    Whitespace,
    /// Known misspellings corrected.
    Spelling,
    /// Truncated "LIMITED" variants folded to `LTD`.
    LegalSuffix,
    /// Organisational-form abbreviations (PLC, CIC, CVS, ...).
    OrganisationForm,
    /// Trailing `CO` expanded to `COMPANY`.
    TrailingCompany,
    /// Stop-word deletion.
    StopWords,
    /// Single-letter runs collapsed (`P T A` to `PTA`).
    Abbreviation,
    /// PTA detection and structural cleanup.
    Cleanup,
    /// Scout, guide, school and club terminology.
    GroupType,
    /// Counties, regions and place-name fixes.
    Geography,
    /// Ordinal words, markers and numeral suffixes.
    Ordinal,
    /// Compound-word fixes.
    Compound,
    /// Final whitespace, quote and case cleanup.
    Finish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Possessive => "possessive",
            Self::Punctuation => "punctuation",
            Self::PossessiveSuffix => "possessive-suffix",
            Self::Whitespace => "whitespace",
            Self::Spelling => "spelling",
            Self::LegalSuffix => "legal-suffix",
            Self::OrganisationForm => "organisation-form",
            Self::TrailingCompany => "trailing-company",
            Self::StopWords => "stop-words",
            Self::Abbreviation => "abbreviation",
            Self::Cleanup => "cleanup",
            Self::GroupType => "group-type",
            Self::Geography => "geography",
            Self::Ordinal => "ordinal",
            Self::Compound => "compound",
            Self::Finish => "finish",
        };
        f.write_str(name)
    }
}

/// Metadata about a normalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMetadata {
    /// Unique step identifier.
    pub id: &'static str,
    /// Stage the step belongs to.
    pub stage: Stage,
    /// Human-readable description.
    pub description: &'static str,
}

impl StepMetadata {
    pub const fn new(id: &'static str, stage: Stage, description: &'static str) -> Self {
        Self {
            id,
            stage,
            description,
        }
    }
}

/// One literal rewrite: every occurrence of the pattern becomes the replacement.
pub type Rewrite = (&'static str, &'static str);

/// Trait for individual normalization steps.
///
/// Steps are pure: the output depends only on the input string.
pub trait RewriteStep: Send + Sync {
    /// Get the step metadata.
    fn metadata(&self) -> &StepMetadata;

    /// Check if this step should run on the current name.
    fn should_apply(&self, _name: &str) -> bool {
        true
    }

    /// Apply the step.
    fn apply(&self, name: String) -> String;
}

/// Ordered literal substring rewrites, optionally gated on a marker token.
///
/// Rules are applied one after another, never simultaneously: an earlier rule
/// may consume text a later, more specific rule would have matched.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    metadata: StepMetadata,
    guard: Option<&'static str>,
    rules: &'static [Rewrite],
}

impl ReplacementTable {
    pub const fn new(metadata: StepMetadata, rules: &'static [Rewrite]) -> Self {
        Self {
            metadata,
            guard: None,
            rules,
        }
    }

    /// Only run when the name already contains `marker`.
    #[must_use]
    pub fn guarded(mut self, marker: &'static str) -> Self {
        self.guard = Some(marker);
        self
    }
}

impl RewriteStep for ReplacementTable {
    fn metadata(&self) -> &StepMetadata {
        &self.metadata
    }

    fn should_apply(&self, name: &str) -> bool {
        self.guard.is_none_or(|marker| name.contains(marker))
    }

    fn apply(&self, name: String) -> String {
        apply_rewrites(name, self.rules.iter().copied())
    }
}

/// Apply rewrites in order, each over the output of the previous one.
pub fn apply_rewrites<'a>(
    mut name: String,
    rules: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    for (pattern, replacement) in rules {
        if name.contains(pattern) {
            name = name.replace(pattern, replacement);
        }
    }
    name
}

/// Executes a set of steps in order.
#[derive(Clone)]
pub struct StepExecutor {
    steps: Vec<Arc<dyn RewriteStep>>,
    disabled_steps: HashSet<&'static str>,
}

impl Default for StepExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl StepExecutor {
    /// Create a new empty step executor.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            disabled_steps: HashSet::new(),
        }
    }

    /// Add a step to the end of the executor.
    pub fn add_step(&mut self, step: Arc<dyn RewriteStep>) {
        self.steps.push(step);
    }

    /// Disable a step by ID. Returns false when no step has that ID.
    pub fn disable_step(&mut self, step_id: &str) -> bool {
        match self.steps.iter().find(|s| s.metadata().id == step_id) {
            Some(step) => {
                self.disabled_steps.insert(step.metadata().id);
                true
            }
            None => false,
        }
    }

    /// Enable a previously disabled step.
    pub fn enable_step(&mut self, step_id: &str) {
        self.disabled_steps.remove(step_id);
    }

    /// Check if a step is disabled.
    pub fn is_step_disabled(&self, step_id: &str) -> bool {
        self.disabled_steps.contains(step_id)
    }

    /// Execute all enabled steps.
    pub fn execute(&self, input: &str) -> String {
        let mut name = input.to_string();
        for step in &self.steps {
            let meta = step.metadata();

            if self.is_step_disabled(meta.id) {
                continue;
            }

            if !step.should_apply(&name) {
                continue;
            }

            name = step.apply(name);
        }
        name
    }

    /// Get all step metadata, in execution order.
    pub fn step_metadata(&self) -> Vec<&StepMetadata> {
        self.steps.iter().map(|s| s.metadata()).collect()
    }
}

impl fmt::Debug for StepExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepExecutor")
            .field(
                "steps",
                &self.steps.iter().map(|s| s.metadata().id).collect::<Vec<_>>(),
            )
            .field("disabled_steps", &self.disabled_steps)
            .finish()
    }
}
