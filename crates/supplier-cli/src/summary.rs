use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use supplier_cli::types::{MatchRunResult, RegistrySummary};

pub fn print_summary(result: &MatchRunResult) {
    println!("Suppliers: {}", result.suppliers_path.display());
    println!("Output: {}", result.output_dir.display());
    println!("{}", screening_table(result));
    println!("{}", registry_table(&result.registries));
}

fn screening_table(result: &MatchRunResult) -> Table {
    let report = &result.screening;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Screening"), header_cell("Suppliers")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Read"), Cell::new(result.supplier_rows)]);
    for (label, count) in [
        ("Numeric", report.numeric),
        ("Too short", report.too_short),
        ("Placeholder", report.placeholder),
        ("Several organisations", report.ambiguous),
        ("Duplicate", report.duplicate),
    ] {
        table.add_row(vec![dim_cell(format!("  - {label}")), dropped_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("Matched")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.suppliers.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn registry_table(registries: &[RegistrySummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Register"),
        header_cell("Rows"),
        header_cell("Entries"),
        header_cell("Collisions"),
        header_cell("Queries"),
        header_cell("Exact"),
        header_cell("Matches"),
        header_cell("Time"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Right);

    for summary in registries {
        table.add_row(vec![
            Cell::new(summary.kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.rows),
            Cell::new(summary.entries),
            dropped_cell(summary.dropped),
            Cell::new(summary.queries),
            exact_cell(summary.exact, summary.queries),
            path_cell(&summary.match_output),
            dim_cell(format!("{:.1}s", summary.elapsed.as_secs_f64())),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn exact_cell(exact: usize, queries: usize) -> Cell {
    if queries == 0 {
        return dim_cell("-");
    }
    let share = exact as f64 * 100.0 / queries as f64;
    Cell::new(format!("{exact} ({share:.0}%)")).fg(Color::Green)
}

fn path_cell(path: &Path) -> Cell {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Cell::new(name)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
