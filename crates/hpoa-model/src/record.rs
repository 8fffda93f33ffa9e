use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{DiseaseDatabase, EvidenceCode, FrequencyCategory, QcIssues, Sex, TermId};

/// Frequency of a phenotype in a disease.
///
/// Either a categorical HPO frequency term or a raw numeric expression such
/// as `3/10` or `45%` that is parsed further downstream. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Category(FrequencyCategory),
    Raw(String),
}

impl Frequency {
    pub fn term_id(&self) -> Option<TermId> {
        match self {
            Frequency::Category(category) => Some(category.term_id()),
            Frequency::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            Frequency::Category(_) => None,
            Frequency::Raw(value) => Some(value),
        }
    }

    /// Value as written to the v2 frequency column.
    pub fn render(&self) -> String {
        match self {
            Frequency::Category(category) => category.curie().to_string(),
            Frequency::Raw(value) => value.clone(),
        }
    }
}

/// One annotation in the v2 format, produced by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub disease_id: String,
    pub disease_name: String,
    pub database: DiseaseDatabase,
    /// Always a primary id present in the ontology.
    pub phenotype_id: TermId,
    pub phenotype_label: String,
    pub age_of_onset_id: Option<TermId>,
    pub age_of_onset_label: Option<String>,
    pub evidence: Option<EvidenceCode>,
    pub frequency: Option<Frequency>,
    pub sex: Option<Sex>,
    pub negated: bool,
    pub modifiers: BTreeSet<TermId>,
    /// Free-text description left over after modifier mining.
    pub description: String,
    pub publication: String,
    pub curator: String,
    /// `YYYY-MM-DD`
    pub date_created: String,
    pub qc: QcIssues,
}

impl CanonicalRecord {
    /// Modifier ids joined with `;` in sorted order.
    pub fn modifier_string(&self) -> String {
        self.modifiers
            .iter()
            .map(TermId::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn negation_string(&self) -> &'static str {
        if self.negated { "NOT" } else { "" }
    }

    /// Curation attribution in v2 form: `curator[YYYY-MM-DD]`.
    pub fn biocuration(&self) -> String {
        format!("{}[{}]", self.curator, self.date_created)
    }

    pub fn has_issues(&self) -> bool {
        self.qc.has_issues()
    }
}
