use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hpoa_convert::ErrorKind;
use hpoa_model::QcCode;

use crate::types::{ConvertResult, FileSummary, ModifierListing, RowError};

/// Rows listed per file unless every error was requested.
const ERROR_PREVIEW: usize = 10;

pub fn print_summary(result: &ConvertResult, show_all_errors: bool) {
    println!("Ontology: {}", result.ontology.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Converted"),
        header_cell("With issues"),
        header_cell("Fatal"),
        header_cell("Recoverable"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);

    let mut totals = [0usize; 5];
    let mut qc_totals: BTreeMap<QcCode, usize> = BTreeMap::new();
    for file in &result.files {
        let batch = &file.batch;
        for (total, value) in totals.iter_mut().zip([
            batch.rows,
            batch.converted,
            batch.with_issues,
            batch.fatal,
            batch.recoverable,
        ]) {
            *total += value;
        }
        for (code, count) in &batch.qc_counts {
            *qc_totals.entry(*code).or_default() += count;
        }
        table.add_row(vec![
            Cell::new(file_name(file)),
            Cell::new(batch.rows),
            Cell::new(batch.converted),
            count_cell(batch.with_issues, Color::Yellow),
            count_cell(batch.fatal, Color::Red),
            count_cell(batch.recoverable, Color::Yellow),
            written_cell(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        Cell::new(totals[1]).add_attribute(Attribute::Bold),
        count_cell(totals[2], Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals[4], Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_qc_table(&qc_totals);
    for file in &result.files {
        print_error_table(file, show_all_errors);
    }
    if let Some(halt) = &result.halted {
        eprintln!(
            "Halted at {} line {}; remaining rows and files were not converted.",
            halt.source.display(),
            halt.line
        );
    }
}

fn print_qc_table(totals: &BTreeMap<QcCode, usize>) {
    if totals.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("QC code"),
        header_cell("Records"),
        header_cell("Meaning"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for code in QcCode::ALL {
        let Some(count) = totals.get(&code) else {
            continue;
        };
        let name = if code.is_cosmetic() {
            dim_cell(code.as_str())
        } else {
            Cell::new(code.as_str()).fg(Color::Yellow)
        };
        table.add_row(vec![name, Cell::new(count), Cell::new(code.description())]);
    }
    println!("{table}");
}

fn print_error_table(file: &FileSummary, show_all: bool) {
    if file.errors.is_empty() {
        return;
    }
    let limit = if show_all { usize::MAX } else { ERROR_PREVIEW };
    println!("Errors in {}:", file_name(file));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Kind"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in file.errors.iter().take(limit) {
        table.add_row(error_row(error));
    }
    println!("{table}");
    if file.errors.len() > limit {
        println!(
            "... {} more (use --all-errors to list them)",
            file.errors.len() - limit
        );
    }
}

fn error_row(error: &RowError) -> Vec<Cell> {
    let kind = match error.kind {
        ErrorKind::Fatal => Cell::new(error.kind).fg(Color::Red),
        ErrorKind::Recoverable => Cell::new(error.kind).fg(Color::Yellow),
    };
    vec![
        Cell::new(error.line),
        kind,
        Cell::new(error.column),
        Cell::new(&error.message),
    ]
}

pub fn print_modifiers(listing: &ModifierListing) {
    println!("Modifier root: {}", listing.root);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Term")]);
    apply_table_style(&mut table);
    for (label, id) in &listing.entries {
        table.add_row(vec![Cell::new(label), Cell::new(id)]);
    }
    println!("{table}");
    println!("{} labels", listing.entries.len());

    if listing.collisions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Duplicate label"),
        header_cell("Kept"),
        header_cell("Discarded"),
    ]);
    apply_table_style(&mut table);
    for collision in &listing.collisions {
        table.add_row(vec![
            Cell::new(&collision.label).fg(Color::Yellow),
            Cell::new(&collision.kept),
            dim_cell(&collision.discarded),
        ]);
    }
    println!("{table}");
}

fn file_name(file: &FileSummary) -> String {
    file.source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.source.display().to_string())
}

fn written_cell(file: &FileSummary) -> Cell {
    match &file.output {
        Some(_) => Cell::new("✓").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
