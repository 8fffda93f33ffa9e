use std::path::PathBuf;

use hpoa_model::LegacyColumn;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TSV {source_name} at line {line}: {source}")]
    Csv {
        source_name: String,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name}: missing header row")]
    MissingHeader { source_name: String },

    #[error("{source_name}: missing required column \"{column}\"")]
    MissingColumn {
        source_name: String,
        column: LegacyColumn,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source_name: &str, source: csv::Error) -> Self {
        let line = source.position().map(csv::Position::line).unwrap_or(0);
        Self::Csv {
            source_name: source_name.to_string(),
            line,
            source,
        }
    }
}
