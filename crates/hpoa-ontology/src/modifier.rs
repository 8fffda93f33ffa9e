//! Case-insensitive index of clinical modifier labels.
//!
//! The index covers every term below the "Clinical modifier" root
//! (`HP:0012823`), root included. It is built once per process and is
//! read-only afterwards.
//!
//! ## Duplicate labels
//!
//! Two modifier terms can share the same lowercased label. Descendants are
//! visited in ascending id order and the first id seen keeps the label, so
//! the lowest id wins. Every discarded id is recorded as a
//! [`LabelCollision`] and logged, so curators can fix the ontology side.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use hpoa_model::TermId;

use crate::OntologyView;

/// Root of the HPO clinical modifier subontology.
pub const CLINICAL_MODIFIER_ROOT: &str = "HP:0012823";

/// A label claimed by more than one modifier term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCollision {
    /// Lowercased label.
    pub label: String,
    pub kept: TermId,
    pub discarded: TermId,
}

#[derive(Debug, Clone, Default)]
pub struct ModifierIndex {
    by_label: HashMap<String, TermId>,
    collisions: Vec<LabelCollision>,
}

impl ModifierIndex {
    pub fn clinical_modifier_root() -> TermId {
        TermId::hpo(&CLINICAL_MODIFIER_ROOT[3..])
    }

    /// Builds the index from all descendants of `root`.
    pub fn build(ontology: &dyn OntologyView, root: &TermId) -> Self {
        let descendants = ontology.descendants(root);
        let labelled = descendants.into_iter().filter_map(|id| {
            let label = ontology.label(&id)?.to_string();
            Some((id, label))
        });
        let index = Self::from_labels(labelled);
        debug!(
            root = %root,
            modifier_count = index.len(),
            collision_count = index.collisions.len(),
            "modifier index built"
        );
        index
    }

    /// Builds the index from `(id, label)` pairs, applying the same
    /// lowest-id-wins tie-break as [`ModifierIndex::build`].
    pub fn from_labels<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TermId, S)>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<(TermId, String)> = entries
            .into_iter()
            .map(|(id, label)| (id, label.as_ref().to_lowercase()))
            .collect();
        sorted.sort();

        let mut index = Self::default();
        for (id, label) in sorted {
            match index.by_label.get(&label) {
                Some(kept) if *kept != id => {
                    warn!(
                        label = %label,
                        kept = %kept,
                        discarded = %id,
                        "duplicate modifier label"
                    );
                    index.collisions.push(LabelCollision {
                        label,
                        kept: kept.clone(),
                        discarded: id,
                    });
                }
                Some(_) => {}
                None => {
                    index.by_label.insert(label, id);
                }
            }
        }
        index
    }

    /// Exact, case-insensitive label lookup. No trimming, no partial matches.
    pub fn lookup(&self, label: &str) -> Option<&TermId> {
        self.by_label.get(&label.to_lowercase())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.lookup(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    pub fn collisions(&self) -> &[LabelCollision] {
        &self.collisions
    }

    /// Entries sorted by label.
    pub fn entries(&self) -> BTreeMap<&str, &TermId> {
        self.by_label
            .iter()
            .map(|(label, id)| (label.as_str(), id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_exact() {
        let index = ModifierIndex::from_labels([
            (TermId::hpo("0025303"), "Episodic"),
            (TermId::hpo("0012828"), "Severe"),
        ]);
        assert_eq!(index.lookup("episodic"), Some(&TermId::hpo("0025303")));
        assert_eq!(index.lookup("EPISODIC"), Some(&TermId::hpo("0025303")));
        assert_eq!(index.lookup("episod"), None);
        assert_eq!(index.lookup(" episodic"), None);
    }

    #[test]
    fn lowest_id_wins_on_duplicate_label() {
        let index = ModifierIndex::from_labels([
            (TermId::hpo("0031915"), "Stable"),
            (TermId::hpo("0012830"), "stable"),
        ]);
        assert_eq!(index.lookup("stable"), Some(&TermId::hpo("0012830")));
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.collisions(),
            &[LabelCollision {
                label: "stable".to_string(),
                kept: TermId::hpo("0012830"),
                discarded: TermId::hpo("0031915"),
            }]
        );
    }

    #[test]
    fn root_constant_parses() {
        assert_eq!(
            ModifierIndex::clinical_modifier_root().as_str(),
            CLINICAL_MODIFIER_ROOT
        );
    }
}
