//! Header-driven reader for legacy annotation TSV files.
//!
//! Columns are located by header name, so files with missing optional columns
//! or a different column order still load. Header names are compared on their
//! uppercase alphanumeric characters only (`#Disease ID`, `disease_id` and
//! `DISEASE ID` all name the same column).

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, info_span, warn};

use hpoa_model::{LegacyColumn, LegacyLine, LegacyRow};

use crate::IngestError;

/// Columns without which a row cannot be converted.
pub const REQUIRED_COLUMNS: [LegacyColumn; 3] = [
    LegacyColumn::DiseaseId,
    LegacyColumn::DiseaseName,
    LegacyColumn::PhenotypeId,
];

/// A loaded legacy file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTable {
    pub source: PathBuf,
    pub headers: Vec<String>,
    /// Column mapped from each header position, `None` for unknown headers.
    pub columns: Vec<Option<LegacyColumn>>,
    pub lines: Vec<LegacyLine>,
}

impl LegacyTable {
    /// Header names that did not match any legacy column.
    pub fn unknown_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .zip(&self.columns)
            .filter(|(_, column)| column.is_none())
            .map(|(header, _)| header.as_str())
    }
}

/// Creates a compact key by keeping only uppercase alphanumeric characters.
fn compact_key(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

fn header_lookup() -> HashMap<String, LegacyColumn> {
    LegacyColumn::ALL
        .into_iter()
        .map(|column| (compact_key(column.header()), column))
        .collect()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim_matches('\u{feff}')
}

/// Maps each header to a legacy column.
pub fn map_headers(headers: &StringRecord) -> Vec<Option<LegacyColumn>> {
    let lookup = header_lookup();
    headers
        .iter()
        .map(|header| lookup.get(&compact_key(normalize_cell(header))).copied())
        .collect()
}

/// Reads a legacy annotation file from disk.
pub fn read_legacy_file(path: &Path) -> Result<LegacyTable, IngestError> {
    let span = info_span!("read_legacy_file", path = %path.display());
    let _guard = span.enter();
    let file = File::open(path).map_err(|error| IngestError::io(path, error))?;
    let mut table = read_legacy_rows(file, &path.display().to_string())?;
    table.source = path.to_path_buf();
    info!(rows = table.lines.len(), "legacy file loaded");
    Ok(table)
}

/// Reads legacy rows from any tab-separated source.
///
/// The first non-blank line is the header. Blank lines are skipped; every row
/// keeps the 1-based line number it was read from.
pub fn read_legacy_rows<R: Read>(reader: R, source_name: &str) -> Result<LegacyTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|error| IngestError::csv(source_name, error))?;
                if !is_blank(&record) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::MissingHeader {
                    source_name: source_name.to_string(),
                });
            }
        }
    };

    let columns = map_headers(&header);
    for required in REQUIRED_COLUMNS {
        if !columns.contains(&Some(required)) {
            return Err(IngestError::MissingColumn {
                source_name: source_name.to_string(),
                column: required,
            });
        }
    }
    for (header, column) in header.iter().zip(&columns) {
        if column.is_none() {
            warn!(source = source_name, header, "ignoring unknown column");
        }
    }

    let mut lines = Vec::new();
    for record in records {
        let record = record.map_err(|error| IngestError::csv(source_name, error))?;
        if is_blank(&record) {
            continue;
        }
        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(0);
        let mut row = LegacyRow::new();
        for (value, column) in record.iter().zip(&columns) {
            if let Some(column) = column {
                row.set(*column, normalize_cell(value));
            }
        }
        lines.push(LegacyLine::new(line, row));
    }
    debug!(source = source_name, rows = lines.len(), "legacy rows read");

    Ok(LegacyTable {
        source: PathBuf::from(source_name),
        headers: header.iter().map(|value| normalize_cell(value).trim().to_string()).collect(),
        columns,
        lines,
    })
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}
