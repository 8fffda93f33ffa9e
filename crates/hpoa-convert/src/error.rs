use hpoa_model::LegacyColumn;
use thiserror::Error;

/// How far a conversion error reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// No record can be produced for the row.
    Fatal,
    /// The record is still produced; the offending field is left unset.
    Recoverable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Fatal => "fatal",
            ErrorKind::Recoverable => "recoverable",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem with one column of one legacy row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unrecognized disease database for id \"{id}\" (expected OMIM, ORPHA or DECIPHER prefix)")]
    UnknownDiseaseDatabase { id: String },
    #[error("disease name is empty")]
    EmptyDiseaseName,
    #[error("{column}: malformed term id \"{value}\": {reason}")]
    MalformedTermId {
        column: LegacyColumn,
        value: String,
        reason: String,
    },
    #[error("{column}: term {id} not found in ontology")]
    UnknownTerm { column: LegacyColumn, id: String },
    #[error("unmapped frequency \"{value}\"")]
    UnmappedFrequency { value: String },
    #[error("could not resolve modifier \"{token}\" in description \"{description}\"")]
    UnresolvedModifier { token: String, description: String },
    #[error("malformed date \"{value}\"")]
    MalformedDate { value: String },
    #[error("{column}: unrecognized sex code \"{value}\"")]
    UnrecognizedSex { column: LegacyColumn, value: String },
    #[error("{column}: unrecognized negation code \"{value}\"")]
    UnrecognizedNegation { column: LegacyColumn, value: String },
    #[error("{column}: required value was never supplied")]
    MissingField { column: LegacyColumn },
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::UnrecognizedSex { .. } | ConversionError::UnrecognizedNegation { .. } => {
                ErrorKind::Recoverable
            }
            _ => ErrorKind::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }

    /// The legacy column the error originates from.
    pub fn column(&self) -> LegacyColumn {
        match self {
            ConversionError::UnknownDiseaseDatabase { .. } => LegacyColumn::DiseaseId,
            ConversionError::EmptyDiseaseName => LegacyColumn::DiseaseName,
            ConversionError::MalformedTermId { column, .. }
            | ConversionError::UnknownTerm { column, .. }
            | ConversionError::UnrecognizedSex { column, .. }
            | ConversionError::UnrecognizedNegation { column, .. }
            | ConversionError::MissingField { column } => *column,
            ConversionError::UnmappedFrequency { .. } => LegacyColumn::Frequency,
            ConversionError::UnresolvedModifier { .. } => LegacyColumn::Description,
            ConversionError::MalformedDate { .. } => LegacyColumn::DateCreated,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
