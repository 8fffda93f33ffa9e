use std::collections::BTreeSet;

use hpoa_model::TermId;

/// Read-only, in-memory view of an ontology.
///
/// Conversion only ever reads through this trait, so any implementation that
/// is `Sync` can be shared by all worker threads without locking.
pub trait OntologyView {
    /// Resolves `id` to the current primary id. Alternate ids map to their
    /// primary id, primary ids map to themselves, unknown ids to `None`.
    fn primary_id(&self, id: &TermId) -> Option<TermId>;

    /// Current label of the term with this (primary or alternate) id.
    fn label(&self, id: &TermId) -> Option<&str>;

    fn contains(&self, id: &TermId) -> bool {
        self.primary_id(id).is_some()
    }

    /// All terms reachable from `root` along inverse is-a edges, `root`
    /// included. Empty if `root` is unknown.
    fn descendants(&self, root: &TermId) -> BTreeSet<TermId>;
}
