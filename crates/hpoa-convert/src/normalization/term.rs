//! HPO term id validation.

use hpoa_model::{HPO_PREFIX, LegacyColumn, TermId};
use hpoa_ontology::OntologyView;

use crate::ConversionError;

/// Length of a well-formed HPO id: `HP:` plus seven digits.
pub const HPO_ID_LENGTH: usize = 10;

/// A term id checked against the ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTerm {
    /// Primary id.
    pub id: TermId,
    /// Current ontology label.
    pub label: String,
    /// `true` when the input was an alternate id.
    pub replaced_alt_id: bool,
}

/// Validates the shape of an HPO id and resolves it to its primary id.
pub fn resolve_hpo_term(
    ontology: &dyn OntologyView,
    column: LegacyColumn,
    raw: &str,
) -> Result<ResolvedTerm, ConversionError> {
    let value = raw.trim();
    let malformed = |reason: &str| ConversionError::MalformedTermId {
        column,
        value: value.to_string(),
        reason: reason.to_string(),
    };
    if !value.starts_with(&format!("{HPO_PREFIX}:")) {
        return Err(malformed("expected HP: prefix"));
    }
    if value.len() != HPO_ID_LENGTH {
        return Err(malformed("expected HP: followed by seven digits"));
    }
    let id = TermId::new(value).map_err(|error| malformed(&error.to_string()))?;
    let unknown = || ConversionError::UnknownTerm {
        column,
        id: value.to_string(),
    };
    let primary = ontology.primary_id(&id).ok_or_else(unknown)?;
    let label = ontology.label(&primary).ok_or_else(unknown)?.to_string();
    Ok(ResolvedTerm {
        replaced_alt_id: primary != id,
        id: primary,
        label,
    })
}
