//! The ordered normalization pipeline.

use std::sync::{Arc, LazyLock};

use supplier_model::CanonicalName;

use crate::rule::{ReplacementTable, RewriteStep, Stage, StepExecutor, StepMetadata};
use crate::steps::{self, TransformStep};
use crate::tables;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Normalize a raw organisation name with the default pipeline.
///
/// Total over all strings: empty or punctuation-only input yields an empty
/// canonical name.
pub fn normalize(raw: &str) -> CanonicalName {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// Ordered pipeline of named rewrite steps.
#[derive(Debug, Clone)]
pub struct Normalizer {
    executor: StepExecutor,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Build the default pipeline with every step enabled.
    pub fn new() -> Self {
        let mut executor = StepExecutor::new();
        for step in default_steps() {
            executor.add_step(step);
        }
        Self { executor }
    }

    pub fn normalize(&self, raw: &str) -> CanonicalName {
        CanonicalName::new(self.executor.execute(raw))
    }

    /// Disable a step by ID. Returns false when no step has that ID.
    pub fn disable_step(&mut self, step_id: &str) -> bool {
        self.executor.disable_step(step_id)
    }

    /// Builder form of [`Normalizer::disable_step`]; unknown IDs are ignored.
    #[must_use]
    pub fn without_step(mut self, step_id: &str) -> Self {
        if !self.disable_step(step_id) {
            tracing::warn!(step_id, "unknown normalization step");
        }
        self
    }

    pub fn enable_step(&mut self, step_id: &str) {
        self.executor.enable_step(step_id);
    }

    pub fn is_step_disabled(&self, step_id: &str) -> bool {
        self.executor.is_step_disabled(step_id)
    }

    /// Step metadata in execution order.
    pub fn steps(&self) -> Vec<&StepMetadata> {
        self.executor.step_metadata()
    }
}

fn table(
    id: &'static str,
    stage: Stage,
    description: &'static str,
    rules: &'static [crate::rule::Rewrite],
) -> ReplacementTable {
    ReplacementTable::new(StepMetadata::new(id, stage, description), rules)
}

fn transform(
    id: &'static str,
    stage: Stage,
    description: &'static str,
    apply: fn(String) -> String,
) -> TransformStep {
    TransformStep::new(StepMetadata::new(id, stage, description), apply)
}

fn default_steps() -> Vec<Arc<dyn RewriteStep>> {
    vec![
        Arc::new(transform(
            "uppercase",
            Stage::Possessive,
            "Upper-case the raw name",
            steps::uppercase,
        )),
        Arc::new(table(
            "backtick-possessive",
            Stage::Possessive,
            "Backtick possessives to apostrophes",
            tables::BACKTICK_POSSESSIVE,
        )),
        Arc::new(table(
            "punctuation",
            Stage::Punctuation,
            "Fold punctuation to spaces",
            tables::PUNCTUATION,
        )),
        Arc::new(transform(
            "pad-boundaries",
            Stage::Whitespace,
            "Pad the name with boundary spaces",
            steps::pad_boundaries,
        )),
        Arc::new(table(
            "possessive-suffix",
            Stage::PossessiveSuffix,
            "Remove apostrophes and possessive suffixes",
            tables::POSSESSIVE_SUFFIXES,
        )),
        Arc::new(transform(
            "collapse-whitespace",
            Stage::Whitespace,
            "Collapse runs of spaces",
            steps::collapse_whitespace,
        )),
        Arc::new(table(
            "spelling",
            Stage::Spelling,
            "Correct known misspellings",
            tables::MISSPELLINGS,
        )),
        Arc::new(transform(
            "collapse-whitespace-after-spelling",
            Stage::Whitespace,
            "Collapse runs of spaces",
            steps::collapse_whitespace,
        )),
        Arc::new(transform(
            "legal-suffix",
            Stage::LegalSuffix,
            "Fold trailing LIMITED truncations to LTD",
            steps::fold_legal_suffix,
        )),
        Arc::new(table(
            "organisation-form",
            Stage::OrganisationForm,
            "Abbreviate organisational forms",
            tables::ORGANISATION_FORMS,
        )),
        Arc::new(transform(
            "trailing-company",
            Stage::TrailingCompany,
            "Expand a trailing CO to COMPANY",
            steps::expand_trailing_company,
        )),
        Arc::new(table(
            "stop-words",
            Stage::StopWords,
            "Delete stop words",
            tables::STOP_WORDS,
        )),
        Arc::new(transform(
            "collapse-whitespace-after-stop-words",
            Stage::Whitespace,
            "Collapse runs of spaces",
            steps::collapse_whitespace,
        )),
        Arc::new(transform(
            "collapse-abbreviations",
            Stage::Abbreviation,
            "Collapse spaced single-letter runs",
            steps::collapse_spaced_letters,
        )),
        Arc::new(transform(
            "structural-cleanup",
            Stage::Cleanup,
            "Detect parent-teacher associations",
            steps::structural_cleanup,
        )),
        Arc::new(transform(
            "collapse-whitespace-after-cleanup",
            Stage::Whitespace,
            "Collapse runs of spaces",
            steps::collapse_whitespace,
        )),
        Arc::new(table(
            "youth-groups",
            Stage::GroupType,
            "Fold scout, guide, brownie and beaver unit names",
            tables::YOUTH_GROUPS,
        )),
        Arc::new(table(
            "school-types",
            Stage::GroupType,
            "Split or join school-type tokens",
            tables::SCHOOL_TYPES,
        )),
        Arc::new(table(
            "clubs",
            Stage::GroupType,
            "Abbreviate institutes and working mens clubs",
            tables::CLUBS,
        )),
        Arc::new(table(
            "saints-directions",
            Stage::Geography,
            "Abbreviate saints and compass directions",
            tables::SAINTS_AND_DIRECTIONS,
        )),
        Arc::new(table(
            "counties",
            Stage::Geography,
            "Abbreviate ceremonial counties",
            tables::COUNTIES,
        )),
        Arc::new(table(
            "place-spellings",
            Stage::Geography,
            "Correct place-name spellings",
            tables::PLACE_SPELLINGS,
        )),
        Arc::new(table(
            "sports-bodies",
            Stage::GroupType,
            "Abbreviate sports clubs and national bodies",
            tables::SPORTS_AND_BODIES,
        )),
        Arc::new(table(
            "towns",
            Stage::Geography,
            "Shorten town names",
            tables::TOWNS,
        )),
        Arc::new(table(
            "ordinal-words",
            Stage::Ordinal,
            "Spell out low ordinals and number high ones",
            tables::ORDINAL_WORDS,
        )),
        Arc::new(
            table(
                "guide-terms",
                Stage::GroupType,
                "Pluralise brownie and scout inside guide names",
                tables::GUIDE_TERMS,
            )
            .guarded("GUIDE"),
        ),
        Arc::new(
            table(
                "scout-terms",
                Stage::GroupType,
                "Pluralise cubs inside scout names",
                tables::SCOUT_TERMS,
            )
            .guarded("SCOUT"),
        ),
        Arc::new(
            table(
                "school-terms",
                Stage::GroupType,
                "Abbreviate denominations inside school names",
                tables::SCHOOL_TERMS,
            )
            .guarded("SCHOOL"),
        ),
        Arc::new(transform(
            "ordinal-markers",
            Stage::Ordinal,
            "Append numeric markers for spelled ordinals",
            steps::append_ordinal_markers,
        )),
        Arc::new(transform(
            "ordinal-suffixes",
            Stage::Ordinal,
            "Strip numeral suffixes",
            steps::strip_ordinal_suffixes,
        )),
        Arc::new(table(
            "compound-words",
            Stage::Compound,
            "Join compound words and drop standalone A",
            tables::COMPOUND_WORDS,
        )),
        Arc::new(transform(
            "finish",
            Stage::Finish,
            "Collapse spaces, drop quotes, trim and upper-case",
            steps::finish,
        )),
    ]
}
