//! Shared, read-only state handed to every row conversion.

use hpoa_ontology::{ModifierIndex, OntologyView};

use crate::ConversionOptions;

/// Everything a row conversion needs besides the row itself.
///
/// Built once per run. Conversions only read from it, so one context can be
/// shared across worker threads.
pub struct ConversionContext<'a> {
    ontology: &'a (dyn OntologyView + Sync),
    modifiers: ModifierIndex,
    options: ConversionOptions,
}

impl<'a> ConversionContext<'a> {
    /// Builds the modifier index from `options.modifier_root`.
    pub fn new(ontology: &'a (dyn OntologyView + Sync), options: ConversionOptions) -> Self {
        let modifiers = ModifierIndex::build(ontology, &options.modifier_root);
        Self {
            ontology,
            modifiers,
            options,
        }
    }

    pub fn ontology(&self) -> &'a (dyn OntologyView + Sync) {
        self.ontology
    }

    pub fn modifiers(&self) -> &ModifierIndex {
        &self.modifiers
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }
}

impl std::fmt::Debug for ConversionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionContext")
            .field("modifiers", &self.modifiers.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
