#![allow(dead_code)]

use hpoa_model::{LegacyRow, TermId};
use hpoa_ontology::{Ontology, Term};

pub fn hp(local: &str) -> TermId {
    TermId::hpo(local)
}

/// A small slice of HPO: phenotypes, onset terms and clinical modifiers.
pub fn fixture_ontology() -> Ontology {
    Ontology::from_terms([
        Term::new(hp("0000001"), "All"),
        Term::new(hp("0000118"), "Phenotypic abnormality").with_parent(hp("0000001")),
        Term::new(hp("0001250"), "Seizure")
            .with_parent(hp("0000118"))
            .with_alt_id(hp("0002279")),
        Term::new(hp("0001263"), "Global developmental delay").with_parent(hp("0000118")),
        Term::new(hp("0000005"), "Mode of inheritance").with_parent(hp("0000001")),
        Term::new(hp("0003674"), "Onset").with_parent(hp("0000001")),
        Term::new(hp("0003593"), "Infantile onset")
            .with_parent(hp("0003674"))
            .with_alt_id(hp("0003594")),
        Term::new(hp("0012823"), "Clinical modifier").with_parent(hp("0000001")),
        Term::new(hp("0031797"), "Clinical course").with_parent(hp("0012823")),
        Term::new(hp("0025303"), "Episodic").with_parent(hp("0031797")),
        Term::new(hp("0012824"), "Severity").with_parent(hp("0012823")),
        Term::new(hp("0012828"), "Severe").with_parent(hp("0012824")),
        Term::new(hp("0012825"), "Mild").with_parent(hp("0012824")),
    ])
}

/// A row that converts cleanly with no QC codes.
pub fn clean_row() -> LegacyRow {
    LegacyRow {
        disease_id: "OMIM:100100".to_string(),
        disease_name: "PRUNE BELLY SYNDROME".to_string(),
        phenotype_id: "HP:0001250".to_string(),
        phenotype_name: "Seizure".to_string(),
        evidence_id: "IEA".to_string(),
        publication: "OMIM:100100".to_string(),
        assigned_by: "HPO:probinson".to_string(),
        date_created: "2018-01-23".to_string(),
        ..LegacyRow::default()
    }
}
