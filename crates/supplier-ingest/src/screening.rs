//! Screening of raw supplier names before registry matching.

use std::collections::HashSet;

use supplier_model::{CanonicalName, ScreeningOptions};
use supplier_normalize::{Normalizer, count_organisations};
use tracing::{info, info_span};

/// A supplier that survived screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenedSupplier {
    /// Supplier as read, trimmed and upper-cased.
    pub raw: String,
    /// Single organisation resolved by the multiplicity counter.
    pub resolved: String,
    /// Normalized form of `resolved`, used as the match query.
    pub canonical: CanonicalName,
}

/// Kept suppliers and the number dropped at each screening step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningReport {
    pub suppliers: Vec<ScreenedSupplier>,
    pub numeric: usize,
    pub too_short: usize,
    pub placeholder: usize,
    pub ambiguous: usize,
    pub duplicate: usize,
}

impl ScreeningReport {
    pub fn dropped(&self) -> usize {
        self.numeric + self.too_short + self.placeholder + self.ambiguous + self.duplicate
    }

    /// Canonical names of the kept suppliers, in order.
    pub fn queries(&self) -> Vec<CanonicalName> {
        self.suppliers.iter().map(|s| s.canonical.clone()).collect()
    }
}

/// Parses as a number and contains at least one digit.
fn is_numeric(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit()) && value.parse::<f64>().is_ok()
}

/// Filter raw supplier names down to unique, single-organisation queries.
///
/// Steps run in order: upper-case and trim, drop numeric values, drop names
/// too short both before and after normalization, resolve repeated
/// comma-joined names, drop placeholder phrases, drop multi-organisation
/// names, then keep the first occurrence of each resolved name.
pub fn screen_suppliers<S: AsRef<str>>(
    raw_names: &[S],
    options: &ScreeningOptions,
    normalizer: &Normalizer,
) -> ScreeningReport {
    let span = info_span!("screen_suppliers", rows = raw_names.len());
    let _guard = span.enter();

    let mut report = ScreeningReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for raw in raw_names {
        let raw = raw.as_ref().trim().to_uppercase();

        if options.drop_numeric && is_numeric(&raw) {
            report.numeric += 1;
            continue;
        }

        let normalized = normalizer.normalize(&raw);
        if raw.chars().count() < options.min_name_len
            && normalized.as_str().chars().count() < options.min_name_len
        {
            report.too_short += 1;
            continue;
        }

        let multiplicity = count_organisations(&raw);
        if options
            .excluded_phrases
            .iter()
            .any(|phrase| multiplicity.name.contains(phrase.as_str()))
        {
            report.placeholder += 1;
            continue;
        }

        if !multiplicity.is_single() {
            report.ambiguous += 1;
            continue;
        }

        if !seen.insert(multiplicity.name.clone()) {
            report.duplicate += 1;
            continue;
        }

        let canonical = normalizer.normalize(&multiplicity.name);
        report.suppliers.push(ScreenedSupplier {
            raw,
            resolved: multiplicity.name,
            canonical,
        });
    }

    info!(
        kept = report.suppliers.len(),
        numeric = report.numeric,
        too_short = report.too_short,
        placeholder = report.placeholder,
        ambiguous = report.ambiguous,
        duplicate = report.duplicate,
        "suppliers screened"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(names: &[&str]) -> ScreeningReport {
        screen_suppliers(names, &ScreeningOptions::default(), &Normalizer::new())
    }

    #[test]
    fn numeric_suppliers_are_dropped() {
        let report = screen(&["12345", "1250.00", "Oak Primary School"]);
        assert_eq!(report.numeric, 2);
        assert_eq!(report.suppliers.len(), 1);
        assert!(!is_numeric("NAN"));
        assert!(!is_numeric("INF"));
    }

    #[test]
    fn short_names_need_one_long_form() {
        let report = screen(&["ABC", "A.B", "ACME"]);
        assert_eq!(report.too_short, 2);
        assert_eq!(report.suppliers[0].canonical.as_str(), "ACME");
    }

    #[test]
    fn placeholders_and_ambiguous_lists_are_dropped() {
        let report = screen(&[
            "REDACTED",
            "Please see attached",
            "Oak PTA, Elm Trust",
            "Oak PTA, Oak PTA",
        ]);
        assert_eq!(report.placeholder, 2);
        assert_eq!(report.ambiguous, 1);
        assert_eq!(report.suppliers.len(), 1);
        assert_eq!(report.suppliers[0].resolved, "OAK PTA");
        assert_eq!(report.suppliers[0].raw, "OAK PTA, OAK PTA");
    }

    #[test]
    fn first_occurrence_wins() {
        let report = screen(&["oak pta", "OAK PTA ", "Oak PTA, Oak PTA", "Elm Trust"]);
        assert_eq!(report.duplicate, 2);
        let queries: Vec<_> = report.queries().into_iter().map(CanonicalName::into_string).collect();
        assert_eq!(queries, vec!["OAK PTA", "ELM TRUST"]);
        assert_eq!(report.dropped(), 2);
    }

    #[test]
    fn numeric_filter_can_be_disabled() {
        let options = ScreeningOptions::default().with_drop_numeric(false);
        let report = screen_suppliers(&["1234"], &options, &Normalizer::new());
        assert_eq!(report.numeric, 0);
        assert_eq!(report.suppliers.len(), 1);
    }
}
