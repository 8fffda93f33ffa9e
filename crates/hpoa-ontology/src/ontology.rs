use std::collections::{BTreeMap, BTreeSet, HashMap};

use hpoa_model::TermId;

use crate::OntologyView;

/// A single ontology term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: TermId,
    pub label: String,
    /// Deprecated identifiers that now resolve to `id`.
    pub alt_ids: Vec<TermId>,
    /// Direct is-a parents.
    pub parents: Vec<TermId>,
}

impl Term {
    pub fn new(id: TermId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            alt_ids: Vec::new(),
            parents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: TermId) -> Self {
        self.parents.push(parent);
        self
    }

    #[must_use]
    pub fn with_alt_id(mut self, alt_id: TermId) -> Self {
        self.alt_ids.push(alt_id);
        self
    }
}

/// In-memory ontology keyed by primary id.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    terms: BTreeMap<TermId, Term>,
    /// Alternate id -> primary id.
    alt_ids: HashMap<TermId, TermId>,
    /// Parent -> direct children (inverse is-a edges).
    children: HashMap<TermId, BTreeSet<TermId>>,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut ontology = Self::new();
        for term in terms {
            ontology.add_term(term);
        }
        ontology
    }

    /// Adds a term, registering its alternate ids and is-a edges.
    ///
    /// A primary id always wins over an alternate id with the same value.
    pub fn add_term(&mut self, term: Term) {
        self.alt_ids.remove(&term.id);
        for alt_id in &term.alt_ids {
            if !self.terms.contains_key(alt_id) {
                self.alt_ids.insert(alt_id.clone(), term.id.clone());
            }
        }
        for parent in &term.parents {
            self.children
                .entry(parent.clone())
                .or_default()
                .insert(term.id.clone());
        }
        self.terms.insert(term.id.clone(), term);
    }

    /// Looks up a term by primary or alternate id.
    pub fn term(&self, id: &TermId) -> Option<&Term> {
        self.terms
            .get(id)
            .or_else(|| self.alt_ids.get(id).and_then(|primary| self.terms.get(primary)))
    }

    pub fn children(&self, id: &TermId) -> impl Iterator<Item = &TermId> {
        self.children.get(id).into_iter().flatten()
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn alt_id_count(&self) -> usize {
        self.alt_ids.len()
    }
}

impl OntologyView for Ontology {
    fn primary_id(&self, id: &TermId) -> Option<TermId> {
        self.term(id).map(|term| term.id.clone())
    }

    fn label(&self, id: &TermId) -> Option<&str> {
        self.term(id).map(|term| term.label.as_str())
    }

    fn descendants(&self, root: &TermId) -> BTreeSet<TermId> {
        let mut visited = BTreeSet::new();
        let Some(root) = self.primary_id(root) else {
            return visited;
        };
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            if !visited.insert(parent.clone()) {
                continue;
            }
            for child in self.children(&parent) {
                if !visited.contains(child) {
                    stack.push(child.clone());
                }
            }
        }
        // Edges may point at ids that never got a term of their own.
        visited.retain(|id| self.terms.contains_key(id));
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(local: &str) -> TermId {
        TermId::hpo(local)
    }

    fn small() -> Ontology {
        Ontology::from_terms([
            Term::new(id("0000001"), "All"),
            Term::new(id("0012823"), "Clinical modifier").with_parent(id("0000001")),
            Term::new(id("0031797"), "Clinical course").with_parent(id("0012823")),
            Term::new(id("0025303"), "Episodic")
                .with_parent(id("0031797"))
                .with_parent(id("0012823"))
                .with_alt_id(id("0009999")),
            Term::new(id("0000118"), "Phenotypic abnormality").with_parent(id("0000001")),
        ])
    }

    #[test]
    fn resolves_alternate_ids() {
        let ontology = small();
        assert_eq!(ontology.primary_id(&id("0009999")), Some(id("0025303")));
        assert_eq!(ontology.primary_id(&id("0025303")), Some(id("0025303")));
        assert_eq!(ontology.primary_id(&id("1234567")), None);
        assert_eq!(ontology.label(&id("0009999")), Some("Episodic"));
        assert!(ontology.contains(&id("0009999")));
    }

    #[test]
    fn descendants_include_root_and_skip_siblings() {
        let ontology = small();
        let found = ontology.descendants(&id("0012823"));
        let expected: BTreeSet<TermId> = [id("0012823"), id("0031797"), id("0025303")]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn descendants_of_unknown_root_are_empty() {
        assert!(small().descendants(&id("7777777")).is_empty());
    }
}
