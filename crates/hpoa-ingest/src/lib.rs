//! Ingestion of legacy ("old small file") HPO annotation tables.

pub mod error;
pub mod legacy_table;

pub use error::IngestError;
pub use legacy_table::{LegacyTable, REQUIRED_COLUMNS, map_headers, read_legacy_file, read_legacy_rows};
