use std::sync::Mutex;

use anyhow::{Result, bail};
use comfy_table::{Cell, CellAlignment, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use supplier_cli::pipeline::{MatchConfig, MatchProgress, NoProgress, RegistrySource, run_match};
use supplier_cli::types::MatchRunResult;
use supplier_ingest::RegistryColumns;
use supplier_match::CancellationToken;
use supplier_model::{MatchOptions, RegistryKind, ScreeningOptions};
use supplier_normalize::{Normalizer, count_organisations};
use tracing::debug;

use crate::cli::{CountArgs, MatchArgs, NormalizeArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let mut normalizer = Normalizer::new();
    for step in &args.disabled_steps {
        if !normalizer.disable_step(step) {
            bail!("unknown normalization step `{step}`; run `supplier-match steps` for the list");
        }
        debug!(step = %step, "step disabled");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Canonical")]);
    apply_table_style(&mut table);
    for name in &args.names {
        let canonical = normalizer.normalize(name);
        let canonical_cell = if canonical.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(canonical.as_str())
        };
        table.add_row(vec![Cell::new(name), canonical_cell]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_count(args: &CountArgs) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Resolved"),
        header_cell("Organisations"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for name in &args.names {
        let multiplicity = count_organisations(name);
        let count_cell = if multiplicity.is_single() {
            Cell::new(multiplicity.count).fg(Color::Green)
        } else {
            Cell::new(multiplicity.count).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&multiplicity.name),
            count_cell,
        ]);
    }
    println!("{table}");
}

pub fn run_steps() {
    let normalizer = Normalizer::new();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Stage"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, step) in normalizer.steps().into_iter().enumerate() {
        table.add_row(vec![
            dim_cell(position + 1),
            Cell::new(step.id).fg(Color::Blue),
            Cell::new(step.stage),
            Cell::new(step.description),
        ]);
    }
    println!("{table}");
}

pub fn run_match_command(args: &MatchArgs, show_progress: bool) -> Result<MatchRunResult> {
    let config = match_config(args);
    let normalizer = Normalizer::new();
    let cancel = CancellationToken::new();
    if show_progress && !args.no_progress {
        run_match(&config, &normalizer, &cancel, &BarProgress::default())
    } else {
        run_match(&config, &normalizer, &cancel, &NoProgress)
    }
}

fn match_config(args: &MatchArgs) -> MatchConfig {
    let mut config = MatchConfig::new(&args.suppliers, &args.output_dir)
        .with_supplier_column(&args.supplier_column)
        .with_matching(
            MatchOptions::new()
                .with_limit(args.limit)
                .with_workers(args.workers),
        )
        .with_screening(
            ScreeningOptions::new()
                .with_min_name_len(args.min_name_len)
                .with_drop_numeric(!args.keep_numeric),
        );
    if let Some(path) = &args.companies {
        config = config.with_registry(
            RegistrySource::new(RegistryKind::Companies, path).with_columns(RegistryColumns::new(
                &args.companies_id_column,
                &args.companies_name_column,
            )),
        );
    }
    if let Some(path) = &args.spine {
        config = config.with_registry(
            RegistrySource::new(RegistryKind::PublicSpine, path).with_columns(RegistryColumns::new(
                &args.spine_id_column,
                &args.spine_name_column,
            )),
        );
    }
    config
}

/// One progress bar per register batch, drawn on stderr.
#[derive(Default)]
struct BarProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl MatchProgress for BarProgress {
    fn begin(&self, kind: RegistryKind, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg:>18} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
        );
        bar.set_message(kind.label());
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn advance(&self) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            bar.inc(1);
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}
