//! CSV writers for prepared registries and match tables.

use std::collections::BTreeSet;
use std::path::Path;

use csv::Writer;
use supplier_model::{MatchResult, ReferenceRegistry};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::screening::ScreenedSupplier;

fn open_writer(path: &Path) -> Result<Writer<std::fs::File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Writer::from_path(path).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_error(path: &Path) -> impl Fn(csv::Error) -> IngestError + '_ {
    move |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Header of a match table with `limit` ranked candidates per row.
pub fn match_table_header(prefix: &str, limit: usize) -> Vec<String> {
    let mut header = vec!["supplier".to_string(), "normalized_supplier".to_string()];
    for n in 1..=limit {
        header.push(format!("best_{prefix}_match_{n}"));
        header.push(format!("best_{prefix}_match_{n}_score"));
    }
    header.push(format!("best_{prefix}_match_1_id"));
    header
}

/// Write one row per screened supplier with its ranked registry candidates.
///
/// Rows pair `suppliers[i]` with `results[i]`. Candidate slots the registry
/// could not fill are left empty.
pub fn write_match_table(
    path: &Path,
    registry: &ReferenceRegistry,
    suppliers: &[ScreenedSupplier],
    results: &[MatchResult],
    limit: usize,
) -> Result<()> {
    if suppliers.len() != results.len() {
        return Err(IngestError::ResultCountMismatch {
            suppliers: suppliers.len(),
            results: results.len(),
        });
    }

    let on_error = write_error(path);
    let mut writer = open_writer(path)?;
    writer
        .write_record(match_table_header(registry.kind().prefix(), limit))
        .map_err(&on_error)?;

    for (supplier, result) in suppliers.iter().zip(results) {
        let mut record = vec![
            supplier.resolved.clone(),
            supplier.canonical.as_str().to_string(),
        ];
        for slot in 0..limit {
            match result.candidates.get(slot) {
                Some(candidate) => {
                    record.push(candidate.name.as_str().to_string());
                    record.push(candidate.score.to_string());
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        let best_id = result
            .best()
            .and_then(|best| registry.lookup(&best.name))
            .map(|entry| entry.id.clone())
            .unwrap_or_default();
        record.push(best_id);
        writer.write_record(&record).map_err(&on_error)?;
    }

    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = suppliers.len(), "wrote match table");
    Ok(())
}

/// Persist a prepared registry as `id, normalized_name, name, <metadata>`.
pub fn write_registry(path: &Path, registry: &ReferenceRegistry) -> Result<()> {
    let metadata_columns: BTreeSet<&str> = registry
        .entries()
        .iter()
        .flat_map(|entry| entry.metadata.keys().map(String::as_str))
        .collect();

    let on_error = write_error(path);
    let mut writer = open_writer(path)?;
    let mut header = vec!["id", "normalized_name", "name"];
    header.extend(metadata_columns.iter().copied());
    writer.write_record(&header).map_err(&on_error)?;

    for entry in registry.entries() {
        let mut record = vec![
            entry.id.as_str(),
            entry.canonical.as_str(),
            entry.raw_name.as_str(),
        ];
        record.extend(
            metadata_columns
                .iter()
                .map(|column| entry.metadata.get(*column).map_or("", String::as_str)),
        );
        writer.write_record(&record).map_err(&on_error)?;
    }

    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = registry.len(), "wrote registry");
    Ok(())
}
