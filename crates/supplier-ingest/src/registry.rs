//! Registry preparation: normalize names and drop unmatchable entries.

use std::time::Instant;

use supplier_model::{ReferenceEntry, ReferenceRegistry, RegistryKind};
use supplier_normalize::Normalizer;
use tracing::{info, info_span, warn};

use crate::read::RegistryRow;

/// Normalize every registry name and build the matchable registry.
///
/// Entries whose canonical names collide, and entries that normalize to an
/// empty name, are removed. Surviving entries keep their input order.
pub fn prepare_registry(
    kind: RegistryKind,
    rows: Vec<RegistryRow>,
    normalizer: &Normalizer,
) -> ReferenceRegistry {
    let span = info_span!("prepare_registry", registry = %kind, rows = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    let entries = rows
        .into_iter()
        .map(|row| ReferenceEntry {
            canonical: normalizer.normalize(&row.name),
            id: row.id,
            raw_name: row.name,
            metadata: row.metadata,
        })
        .collect();
    let registry = ReferenceRegistry::from_entries(kind, entries);

    if registry.dropped() > 0 {
        warn!(
            dropped = registry.dropped(),
            "dropped registry entries with colliding or empty canonical names"
        );
    }
    info!(
        entries = registry.len(),
        duration_ms = start.elapsed().as_millis(),
        "registry prepared"
    );
    registry
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use supplier_model::CanonicalName;

    use super::*;

    fn row(id: &str, name: &str) -> RegistryRow {
        RegistryRow {
            id: id.to_string(),
            name: name.to_string(),
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn names_that_normalize_alike_are_dropped() {
        let registry = prepare_registry(
            RegistryKind::Companies,
            vec![
                row("01", "Oak Limited"),
                row("02", "Elm Trust"),
                row("03", "OAK LTD"),
                row("04", "..."),
                row("05", "Ash Scout Group"),
            ],
            &Normalizer::new(),
        );
        let ids: Vec<_> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["02", "05"]);
        assert_eq!(registry.dropped(), 3);
        let scouts = registry
            .lookup(&CanonicalName::new("ASH SCOUTS"))
            .expect("scouts entry");
        assert_eq!(scouts.raw_name, "Ash Scout Group");
    }
}
