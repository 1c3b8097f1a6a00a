//! CSV readers for supplier lists and reference registers.

use std::collections::BTreeMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use supplier_model::RegistryKind;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Trim whitespace and a stray byte-order mark from a header cell.
///
/// The companies register ships with a leading space on ` CompanyNumber`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Column names identifying a registry's id and name fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryColumns {
    pub id: String,
    pub name: String,
}

impl RegistryColumns {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Column names used by the published registers.
    pub fn for_kind(kind: RegistryKind) -> Self {
        match kind {
            RegistryKind::Companies => Self::new("CompanyNumber", "CompanyName"),
            RegistryKind::PublicSpine => Self::new("uid", "organisationname"),
        }
    }
}

/// One row of a reference register before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRow {
    pub id: String,
    pub name: String,
    /// Every other column, keyed by trimmed header.
    pub metadata: BTreeMap<String, String>,
}

struct CsvFile {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl CsvFile {
    fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let parse_error = |source: csv::Error| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(parse_error)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(parse_error)?
            .iter()
            .map(normalize_header)
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(parse_error)?;
        debug!(path = %path.display(), columns = headers.len(), rows = records.len(), "read csv");
        Ok(Self { headers, records })
    }

    fn column(&self, name: &str, path: &Path) -> Result<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| *header == wanted)
            .ok_or_else(|| IngestError::MissingColumn {
                column: wanted,
                path: path.to_path_buf(),
            })
    }

    fn cell(record: &StringRecord, idx: usize) -> String {
        record.get(idx).map(normalize_cell).unwrap_or_default()
    }
}

/// Read the supplier-name column of a CSV file, in file order.
pub fn read_supplier_names(path: &Path, column: &str) -> Result<Vec<String>> {
    let file = CsvFile::read(path)?;
    let idx = file.column(column, path)?;
    Ok(file
        .records
        .iter()
        .map(|record| CsvFile::cell(record, idx))
        .collect())
}

/// Read a reference register, keeping unrecognised columns as metadata.
pub fn read_registry_rows(path: &Path, columns: &RegistryColumns) -> Result<Vec<RegistryRow>> {
    let file = CsvFile::read(path)?;
    let id_idx = file.column(&columns.id, path)?;
    let name_idx = file.column(&columns.name, path)?;

    let rows = file
        .records
        .iter()
        .map(|record| {
            let metadata = file
                .headers
                .iter()
                .enumerate()
                .filter(|(idx, header)| *idx != id_idx && *idx != name_idx && !header.is_empty())
                .map(|(idx, header)| (header.clone(), CsvFile::cell(record, idx)))
                .collect();
            RegistryRow {
                id: CsvFile::cell(record, id_idx),
                name: CsvFile::cell(record, name_idx),
                metadata,
            }
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed() {
        assert_eq!(normalize_header(" CompanyNumber"), "CompanyNumber");
        assert_eq!(normalize_header("\u{feff}uid "), "uid");
    }

    #[test]
    fn default_columns_follow_register() {
        assert_eq!(
            RegistryColumns::for_kind(RegistryKind::Companies).name,
            "CompanyName"
        );
        assert_eq!(RegistryColumns::for_kind(RegistryKind::PublicSpine).id, "uid");
    }
}
