use std::path::PathBuf;
use std::time::Duration;

use supplier_ingest::ScreeningReport;
use supplier_model::RegistryKind;

#[derive(Debug)]
pub struct MatchRunResult {
    pub suppliers_path: PathBuf,
    pub output_dir: PathBuf,
    /// Supplier rows read before screening.
    pub supplier_rows: usize,
    pub screening: ScreeningReport,
    pub registries: Vec<RegistrySummary>,
}

#[derive(Debug)]
pub struct RegistrySummary {
    pub kind: RegistryKind,
    /// Rows read from the register file.
    pub rows: usize,
    /// Entries left after collision removal.
    pub entries: usize,
    pub dropped: usize,
    pub queries: usize,
    /// Queries whose best candidate scored 100.
    pub exact: usize,
    pub registry_output: PathBuf,
    pub match_output: PathBuf,
    pub elapsed: Duration,
}
