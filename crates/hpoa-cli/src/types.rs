use std::path::PathBuf;

use hpoa_convert::{BatchSummary, ErrorKind};
use hpoa_model::LegacyColumn;
use hpoa_ontology::LabelCollision;

#[derive(Debug)]
pub struct ConvertResult {
    pub ontology: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileSummary>,
    /// Set when `--halt-on-error` stopped the run.
    pub halted: Option<HaltPoint>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub batch: BatchSummary,
    pub errors: Vec<RowError>,
}

#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub kind: ErrorKind,
    pub column: LegacyColumn,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct HaltPoint {
    pub source: PathBuf,
    pub line: usize,
}

#[derive(Debug)]
pub struct ModifierListing {
    pub root: String,
    pub entries: Vec<(String, String)>,
    pub collisions: Vec<LabelCollision>,
}
