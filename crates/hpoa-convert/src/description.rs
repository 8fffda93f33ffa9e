//! Mining of the free-text description column.
//!
//! Older curation pipelines packed several things into the description:
//! inline modifier tokens (`MODIFIER:episodic`), bare modifier labels
//! (`Severe`), frequency hints such as `(RARE)` and OMIM clinical synopsis
//! provenance (`OMIM-CS:...`). The miner splits the description on `;` and
//! classifies each clause. Clauses are matched on their trimmed form; retained
//! clauses keep their original spacing. Empty trailing clauses are dropped.
//!
//! An `OMIM-CS` citation only flags the description. The clause itself is
//! still classified like any other, so `OMIM-CS:... (IN SOME PATIENTS)` also
//! yields a frequency hint.

use std::collections::BTreeSet;

use tracing::warn;

use hpoa_model::{FrequencyCategory, TermId};
use hpoa_ontology::ModifierIndex;

use crate::ConversionError;

const CLAUSE_SEPARATOR: char = ';';
const OMIM_CLINICAL_SYNOPSIS: &str = "OMIM-CS";
const MODIFIER_PREFIX: &str = "MODIFIER:";
const RARE_MARKER: &str = "(RARE)";
const SOME_PATIENTS_MARKER: &str = "(IN SOME PATIENTS)";
const UNSUPPORTED_MODIFIER: &str = "recurrent";

/// What the miner found in one description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinedDescription {
    /// Surviving clauses joined with `;` in their original order.
    pub residual: String,
    pub modifiers: BTreeSet<TermId>,
    /// At least one bare clause was turned into a modifier.
    pub created_modifier: bool,
    /// A clause cites the OMIM clinical synopsis.
    pub clinical_synopsis: bool,
    /// Frequency implied by the first `(RARE)` or `(IN SOME PATIENTS)` clause.
    pub frequency_hint: Option<FrequencyCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    InlineModifier,
    Rare,
    InSomePatients,
    ModifierLabel,
    Text,
}

impl Clause {
    fn classify(trimmed: &str, modifiers: &ModifierIndex) -> Self {
        if trimmed.starts_with(MODIFIER_PREFIX) {
            Clause::InlineModifier
        } else if trimmed.contains(RARE_MARKER) {
            Clause::Rare
        } else if trimmed.contains(SOME_PATIENTS_MARKER) {
            Clause::InSomePatients
        } else if modifiers.contains_label(trimmed) {
            Clause::ModifierLabel
        } else {
            Clause::Text
        }
    }
}

/// Splits `description` into clauses and routes each one.
///
/// An inline `MODIFIER:` token that is not in the index is an error: the row
/// cannot be converted without losing curated information.
pub fn mine_description(
    description: &str,
    modifiers: &ModifierIndex,
) -> Result<MinedDescription, ConversionError> {
    let mut mined = MinedDescription::default();
    if description.trim().is_empty() {
        return Ok(mined);
    }

    let mut clauses: Vec<&str> = description.split(CLAUSE_SEPARATOR).collect();
    while clauses.last().is_some_and(|clause| clause.is_empty()) {
        clauses.pop();
    }

    let mut retained = Vec::new();
    for clause in clauses {
        let trimmed = clause.trim();
        if trimmed.contains(OMIM_CLINICAL_SYNOPSIS) {
            mined.clinical_synopsis = true;
        }
        match Clause::classify(trimmed, modifiers) {
            Clause::InlineModifier => {
                let token = trimmed[MODIFIER_PREFIX.len()..].trim().to_lowercase();
                if token.contains(UNSUPPORTED_MODIFIER) {
                    warn!(token = %token, "skipping unsupported recurrent modifier");
                    continue;
                }
                let id = modifiers.lookup(&token).ok_or_else(|| {
                    ConversionError::UnresolvedModifier {
                        token: token.clone(),
                        description: description.to_string(),
                    }
                })?;
                mined.modifiers.insert(id.clone());
            }
            Clause::Rare => {
                mined.frequency_hint.get_or_insert(FrequencyCategory::VeryRare);
                retained.push(clause);
            }
            Clause::InSomePatients => {
                mined.frequency_hint.get_or_insert(FrequencyCategory::Occasional);
                retained.push(clause);
            }
            Clause::ModifierLabel => {
                if let Some(id) = modifiers.lookup(trimmed) {
                    mined.modifiers.insert(id.clone());
                    mined.created_modifier = true;
                }
            }
            Clause::Text => retained.push(clause),
        }
    }
    mined.residual = retained.join(";");
    Ok(mined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ModifierIndex {
        ModifierIndex::from_labels([
            (TermId::hpo("0025303"), "Episodic"),
            (TermId::hpo("0012828"), "Severe"),
            (TermId::hpo("0031796"), "Recurrent"),
        ])
    }

    #[test]
    fn inline_modifier_is_extracted() {
        let mined = mine_description("MODIFIER:episodic", &index()).unwrap();
        assert_eq!(
            mined.modifiers,
            BTreeSet::from([TermId::hpo("0025303")])
        );
        assert_eq!(mined.residual, "");
        assert!(!mined.created_modifier);
    }

    #[test]
    fn rare_marker_sets_hint_and_is_retained() {
        let mined = mine_description("Seizures (RARE)", &index()).unwrap();
        assert_eq!(mined.frequency_hint, Some(FrequencyCategory::VeryRare));
        assert_eq!(mined.residual, "Seizures (RARE)");
    }

    #[test]
    fn first_frequency_hint_wins() {
        let mined = mine_description("a (IN SOME PATIENTS);b (RARE)", &index()).unwrap();
        assert_eq!(mined.frequency_hint, Some(FrequencyCategory::Occasional));
        assert_eq!(mined.residual, "a (IN SOME PATIENTS);b (RARE)");
    }

    #[test]
    fn bare_label_becomes_modifier() {
        let mined = mine_description("onset in infancy; severe ;more text", &index()).unwrap();
        assert_eq!(mined.modifiers, BTreeSet::from([TermId::hpo("0012828")]));
        assert!(mined.created_modifier);
        assert_eq!(mined.residual, "onset in infancy;more text");
    }

    #[test]
    fn clinical_synopsis_is_flagged_and_retained() {
        let mined = mine_description("OMIM-CS:RADIOLOGY > OSTEOSCLEROSIS", &index()).unwrap();
        assert!(mined.clinical_synopsis);
        assert_eq!(mined.residual, "OMIM-CS:RADIOLOGY > OSTEOSCLEROSIS");
    }

    #[test]
    fn clinical_synopsis_clause_still_carries_frequency_hint() {
        let mined =
            mine_description("OMIM-CS:NEUROLOGIC > SEIZURES (IN SOME PATIENTS)", &index()).unwrap();
        assert!(mined.clinical_synopsis);
        assert_eq!(mined.frequency_hint, Some(FrequencyCategory::Occasional));
        assert_eq!(mined.residual, "OMIM-CS:NEUROLOGIC > SEIZURES (IN SOME PATIENTS)");
    }

    #[test]
    fn trailing_separators_are_dropped() {
        let mined = mine_description("onset in childhood;Severe;", &index()).unwrap();
        assert_eq!(mined.residual, "onset in childhood");
        assert_eq!(mined.modifiers, BTreeSet::from([TermId::hpo("0012828")]));

        let mined = mine_description("a;;b;;", &index()).unwrap();
        assert_eq!(mined.residual, "a;;b");
    }

    #[test]
    fn recurrent_modifier_is_dropped() {
        let mined = mine_description("MODIFIER:recurrent;text", &index()).unwrap();
        assert!(mined.modifiers.is_empty());
        assert_eq!(mined.residual, "text");
    }

    #[test]
    fn unknown_inline_modifier_is_an_error() {
        let error = mine_description("x;MODIFIER:wobbly", &index()).unwrap_err();
        assert_eq!(
            error,
            ConversionError::UnresolvedModifier {
                token: "wobbly".to_string(),
                description: "x;MODIFIER:wobbly".to_string(),
            }
        );
    }

    #[test]
    fn empty_description() {
        assert_eq!(
            mine_description("", &index()).unwrap(),
            MinedDescription::default()
        );
    }
}
