//! Detection of supplier strings that list several organisations.

use std::collections::BTreeSet;

use supplier_model::OrgMultiplicity;

/// Fragments shorter than this are treated as noise (`LTD`, initials).
pub const MIN_FRAGMENT_LEN: usize = 4;

/// Classify a raw supplier string as one organisation or several.
///
/// Without a comma the upper-cased input is one organisation. Otherwise the
/// comma-separated fragments are trimmed, short ones dropped and the rest
/// upper-cased and deduplicated. A single surviving fragment is the
/// organisation; anything else returns the input unchanged with the number
/// of distinct fragments, which may be zero.
pub fn count_organisations(raw: &str) -> OrgMultiplicity {
    if !raw.contains(',') {
        return OrgMultiplicity::new(raw.to_uppercase(), 1);
    }

    let mut fragments: BTreeSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_FRAGMENT_LEN)
        .map(str::to_uppercase)
        .collect();

    if fragments.len() == 1
        && let Some(only) = fragments.pop_first()
    {
        return OrgMultiplicity::new(only, 1);
    }
    OrgMultiplicity::new(raw, fragments.len())
}
