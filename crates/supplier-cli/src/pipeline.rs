//! The `match` pipeline: screen suppliers, then prepare, match and write
//! each configured register in turn.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use supplier_ingest::{
    RegistryColumns, ScreeningReport, prepare_registry, read_registry_rows, read_supplier_names,
    screen_suppliers, write_match_table, write_registry,
};
use supplier_match::{CancellationToken, CandidateUniverse, match_all};
use supplier_model::{MatchOptions, RegistryKind, ScreeningOptions};
use supplier_normalize::Normalizer;
use tracing::{debug, info, info_span};

use crate::types::{MatchRunResult, RegistrySummary};

/// A register file and the columns holding its ids and names.
#[derive(Debug, Clone)]
pub struct RegistrySource {
    pub kind: RegistryKind,
    pub path: PathBuf,
    pub columns: RegistryColumns,
}

impl RegistrySource {
    /// Source using the register's published column names.
    pub fn new(kind: RegistryKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            columns: RegistryColumns::for_kind(kind),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: RegistryColumns) -> Self {
        self.columns = columns;
        self
    }
}

/// Everything a `match` run needs.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub suppliers: PathBuf,
    pub supplier_column: String,
    pub registries: Vec<RegistrySource>,
    pub output_dir: PathBuf,
    pub matching: MatchOptions,
    pub screening: ScreeningOptions,
}

impl MatchConfig {
    pub fn new(suppliers: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            suppliers: suppliers.into(),
            supplier_column: "supplier".to_string(),
            registries: Vec::new(),
            output_dir: output_dir.into(),
            matching: MatchOptions::default(),
            screening: ScreeningOptions::default(),
        }
    }

    #[must_use]
    pub fn with_supplier_column(mut self, column: impl Into<String>) -> Self {
        self.supplier_column = column.into();
        self
    }

    #[must_use]
    pub fn with_registry(mut self, source: RegistrySource) -> Self {
        self.registries.push(source);
        self
    }

    #[must_use]
    pub fn with_matching(mut self, options: MatchOptions) -> Self {
        self.matching = options;
        self
    }

    #[must_use]
    pub fn with_screening(mut self, options: ScreeningOptions) -> Self {
        self.screening = options;
        self
    }
}

/// Progress sink for batch matching.
pub trait MatchProgress: Sync {
    /// A register's batch of `total` queries is starting.
    fn begin(&self, kind: RegistryKind, total: usize);
    /// One query has been scored.
    fn advance(&self);
    /// The current batch is done.
    fn finish(&self);
}

/// Discards all progress.
pub struct NoProgress;

impl MatchProgress for NoProgress {
    fn begin(&self, _kind: RegistryKind, _total: usize) {}
    fn advance(&self) {}
    fn finish(&self) {}
}

/// `{prefix}_w_normalised.csv` under `output_dir`.
pub fn registry_output_path(output_dir: &Path, kind: RegistryKind) -> PathBuf {
    output_dir.join(format!("{}_w_normalised.csv", kind.prefix()))
}

/// `matches_to_{prefix}.csv` under `output_dir`.
pub fn match_output_path(output_dir: &Path, kind: RegistryKind) -> PathBuf {
    output_dir.join(format!("matches_to_{}.csv", kind.prefix()))
}

/// Read and screen the supplier list.
pub fn ingest(
    config: &MatchConfig,
    normalizer: &Normalizer,
) -> Result<(usize, ScreeningReport)> {
    let span = info_span!("ingest", path = %config.suppliers.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = read_supplier_names(&config.suppliers, &config.supplier_column)
        .with_context(|| format!("read suppliers from {}", config.suppliers.display()))?;
    let report = screen_suppliers(&raw, &config.screening, normalizer);
    info!(
        rows = raw.len(),
        kept = report.suppliers.len(),
        dropped = report.dropped(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok((raw.len(), report))
}

/// Prepare one register, match every screened supplier against it and write
/// both output tables.
pub fn match_registry(
    source: &RegistrySource,
    report: &ScreeningReport,
    config: &MatchConfig,
    normalizer: &Normalizer,
    cancel: &CancellationToken,
    progress: &dyn MatchProgress,
) -> Result<RegistrySummary> {
    let start = Instant::now();
    let kind = source.kind;

    let rows = read_registry_rows(&source.path, &source.columns)
        .with_context(|| format!("read {} from {}", kind.label(), source.path.display()))?;
    let row_count = rows.len();
    let registry = prepare_registry(kind, rows, normalizer);

    let registry_output = registry_output_path(&config.output_dir, kind);
    write_registry(&registry_output, &registry)
        .with_context(|| format!("write normalized {}", kind.label()))?;

    let results = info_span!("match", registry = %kind).in_scope(|| -> Result<_> {
        let start = Instant::now();
        let universe = CandidateUniverse::new(registry.canonical_names());
        let queries = report.queries();
        progress.begin(kind, queries.len());
        let results = match_all(&queries, &universe, &config.matching, cancel, &|| {
            progress.advance();
        });
        progress.finish();
        let results = results.with_context(|| format!("match suppliers to {}", kind.label()))?;
        info!(
            queries = queries.len(),
            candidates = universe.len(),
            duration_ms = start.elapsed().as_millis(),
            "match complete"
        );
        Ok(results)
    })?;

    let match_output = match_output_path(&config.output_dir, kind);
    write_match_table(
        &match_output,
        &registry,
        &report.suppliers,
        &results,
        config.matching.limit,
    )
    .with_context(|| format!("write matches to {}", kind.label()))?;

    let exact = results.iter().filter(|result| result.has_exact()).count();
    debug!(registry = %kind, exact, "registry done");
    Ok(RegistrySummary {
        kind,
        rows: row_count,
        entries: registry.len(),
        dropped: registry.dropped(),
        queries: results.len(),
        exact,
        registry_output,
        match_output,
        elapsed: start.elapsed(),
    })
}

/// Run the whole pipeline for every configured register.
pub fn run_match(
    config: &MatchConfig,
    normalizer: &Normalizer,
    cancel: &CancellationToken,
    progress: &dyn MatchProgress,
) -> Result<MatchRunResult> {
    if config.registries.is_empty() {
        bail!("no register to match against; pass --ch and/or --spine");
    }
    let (supplier_rows, screening) = ingest(config, normalizer)?;

    let mut registries = Vec::with_capacity(config.registries.len());
    for source in &config.registries {
        registries.push(match_registry(
            source, &screening, config, normalizer, cancel, progress,
        )?);
    }

    Ok(MatchRunResult {
        suppliers_path: config.suppliers.clone(),
        output_dir: config.output_dir.clone(),
        supplier_rows,
        screening,
        registries,
    })
}
