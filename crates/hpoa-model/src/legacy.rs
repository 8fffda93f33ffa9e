//! The legacy ("old small file") annotation row.
//!
//! A legacy row is a flat bag of strings. Nothing is validated at this level;
//! the conversion pipeline consumes the row once and turns it into a
//! [`CanonicalRecord`](crate::CanonicalRecord).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the legacy annotation table.
///
/// The declaration order is the order in which the conversion pipeline
/// consumes the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LegacyColumn {
    DiseaseId,
    DiseaseName,
    GeneId,
    GeneName,
    Genotype,
    GeneSymbol,
    PhenotypeId,
    PhenotypeName,
    AgeOfOnsetId,
    AgeOfOnsetName,
    EvidenceId,
    EvidenceName,
    Evidence,
    Frequency,
    SexId,
    SexName,
    Sex,
    NegationId,
    NegationName,
    Description,
    Publication,
    AssignedBy,
    DateCreated,
    EntityId,
    EntityName,
    QualityId,
    QualityName,
    AddlEntityId,
    AddlEntityName,
    AbnormalId,
    AbnormalName,
    Orthologs,
}

impl LegacyColumn {
    pub const ALL: [LegacyColumn; 32] = [
        LegacyColumn::DiseaseId,
        LegacyColumn::DiseaseName,
        LegacyColumn::GeneId,
        LegacyColumn::GeneName,
        LegacyColumn::Genotype,
        LegacyColumn::GeneSymbol,
        LegacyColumn::PhenotypeId,
        LegacyColumn::PhenotypeName,
        LegacyColumn::AgeOfOnsetId,
        LegacyColumn::AgeOfOnsetName,
        LegacyColumn::EvidenceId,
        LegacyColumn::EvidenceName,
        LegacyColumn::Evidence,
        LegacyColumn::Frequency,
        LegacyColumn::SexId,
        LegacyColumn::SexName,
        LegacyColumn::Sex,
        LegacyColumn::NegationId,
        LegacyColumn::NegationName,
        LegacyColumn::Description,
        LegacyColumn::Publication,
        LegacyColumn::AssignedBy,
        LegacyColumn::DateCreated,
        LegacyColumn::EntityId,
        LegacyColumn::EntityName,
        LegacyColumn::QualityId,
        LegacyColumn::QualityName,
        LegacyColumn::AddlEntityId,
        LegacyColumn::AddlEntityName,
        LegacyColumn::AbnormalId,
        LegacyColumn::AbnormalName,
        LegacyColumn::Orthologs,
    ];

    /// Header label as written in legacy files.
    pub fn header(&self) -> &'static str {
        match self {
            LegacyColumn::DiseaseId => "Disease ID",
            LegacyColumn::DiseaseName => "Disease Name",
            LegacyColumn::GeneId => "Gene ID",
            LegacyColumn::GeneName => "Gene Name",
            LegacyColumn::Genotype => "Genotype",
            LegacyColumn::GeneSymbol => "Gene Symbol",
            LegacyColumn::PhenotypeId => "Phenotype ID",
            LegacyColumn::PhenotypeName => "Phenotype Name",
            LegacyColumn::AgeOfOnsetId => "Age of Onset ID",
            LegacyColumn::AgeOfOnsetName => "Age of Onset Name",
            LegacyColumn::EvidenceId => "Evidence ID",
            LegacyColumn::EvidenceName => "Evidence Name",
            LegacyColumn::Evidence => "Evidence",
            LegacyColumn::Frequency => "Frequency",
            LegacyColumn::SexId => "Sex ID",
            LegacyColumn::SexName => "Sex Name",
            LegacyColumn::Sex => "Sex",
            LegacyColumn::NegationId => "Negation ID",
            LegacyColumn::NegationName => "Negation Name",
            LegacyColumn::Description => "Description",
            LegacyColumn::Publication => "Pub",
            LegacyColumn::AssignedBy => "Assigned by",
            LegacyColumn::DateCreated => "Date Created",
            LegacyColumn::EntityId => "Entity ID",
            LegacyColumn::EntityName => "Entity Name",
            LegacyColumn::QualityId => "Quality ID",
            LegacyColumn::QualityName => "Quality Name",
            LegacyColumn::AddlEntityId => "Add'l Entity ID",
            LegacyColumn::AddlEntityName => "Add'l Entity Name",
            LegacyColumn::AbnormalId => "Abnormal ID",
            LegacyColumn::AbnormalName => "Abnormal Name",
            LegacyColumn::Orthologs => "Orthologs",
        }
    }
}

impl fmt::Display for LegacyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A legacy row and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLine {
    pub line: usize,
    pub row: LegacyRow,
}

impl LegacyLine {
    pub fn new(line: usize, row: LegacyRow) -> Self {
        Self { line, row }
    }
}

/// One row of a legacy annotation file, as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRow {
    pub disease_id: String,
    pub disease_name: String,
    pub gene_id: String,
    pub gene_name: String,
    pub genotype: String,
    pub gene_symbol: String,
    pub phenotype_id: String,
    pub phenotype_name: String,
    pub age_of_onset_id: String,
    pub age_of_onset_name: String,
    pub evidence_id: String,
    pub evidence_name: String,
    /// Plain evidence column used by some older files instead of id/name.
    pub evidence: String,
    pub frequency: String,
    pub sex_id: String,
    pub sex_name: String,
    /// Plain sex column used by some older files instead of id/name.
    pub sex: String,
    pub negation_id: String,
    pub negation_name: String,
    pub description: String,
    pub publication: String,
    pub assigned_by: String,
    pub date_created: String,
    pub entity_id: String,
    pub entity_name: String,
    pub quality_id: String,
    pub quality_name: String,
    pub addl_entity_id: String,
    pub addl_entity_name: String,
    pub abnormal_id: String,
    pub abnormal_name: String,
    pub orthologs: String,
}

impl LegacyRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: LegacyColumn) -> &str {
        match column {
            LegacyColumn::DiseaseId => &self.disease_id,
            LegacyColumn::DiseaseName => &self.disease_name,
            LegacyColumn::GeneId => &self.gene_id,
            LegacyColumn::GeneName => &self.gene_name,
            LegacyColumn::Genotype => &self.genotype,
            LegacyColumn::GeneSymbol => &self.gene_symbol,
            LegacyColumn::PhenotypeId => &self.phenotype_id,
            LegacyColumn::PhenotypeName => &self.phenotype_name,
            LegacyColumn::AgeOfOnsetId => &self.age_of_onset_id,
            LegacyColumn::AgeOfOnsetName => &self.age_of_onset_name,
            LegacyColumn::EvidenceId => &self.evidence_id,
            LegacyColumn::EvidenceName => &self.evidence_name,
            LegacyColumn::Evidence => &self.evidence,
            LegacyColumn::Frequency => &self.frequency,
            LegacyColumn::SexId => &self.sex_id,
            LegacyColumn::SexName => &self.sex_name,
            LegacyColumn::Sex => &self.sex,
            LegacyColumn::NegationId => &self.negation_id,
            LegacyColumn::NegationName => &self.negation_name,
            LegacyColumn::Description => &self.description,
            LegacyColumn::Publication => &self.publication,
            LegacyColumn::AssignedBy => &self.assigned_by,
            LegacyColumn::DateCreated => &self.date_created,
            LegacyColumn::EntityId => &self.entity_id,
            LegacyColumn::EntityName => &self.entity_name,
            LegacyColumn::QualityId => &self.quality_id,
            LegacyColumn::QualityName => &self.quality_name,
            LegacyColumn::AddlEntityId => &self.addl_entity_id,
            LegacyColumn::AddlEntityName => &self.addl_entity_name,
            LegacyColumn::AbnormalId => &self.abnormal_id,
            LegacyColumn::AbnormalName => &self.abnormal_name,
            LegacyColumn::Orthologs => &self.orthologs,
        }
    }

    pub fn set(&mut self, column: LegacyColumn, value: impl Into<String>) {
        let value = value.into();
        let slot = match column {
            LegacyColumn::DiseaseId => &mut self.disease_id,
            LegacyColumn::DiseaseName => &mut self.disease_name,
            LegacyColumn::GeneId => &mut self.gene_id,
            LegacyColumn::GeneName => &mut self.gene_name,
            LegacyColumn::Genotype => &mut self.genotype,
            LegacyColumn::GeneSymbol => &mut self.gene_symbol,
            LegacyColumn::PhenotypeId => &mut self.phenotype_id,
            LegacyColumn::PhenotypeName => &mut self.phenotype_name,
            LegacyColumn::AgeOfOnsetId => &mut self.age_of_onset_id,
            LegacyColumn::AgeOfOnsetName => &mut self.age_of_onset_name,
            LegacyColumn::EvidenceId => &mut self.evidence_id,
            LegacyColumn::EvidenceName => &mut self.evidence_name,
            LegacyColumn::Evidence => &mut self.evidence,
            LegacyColumn::Frequency => &mut self.frequency,
            LegacyColumn::SexId => &mut self.sex_id,
            LegacyColumn::SexName => &mut self.sex_name,
            LegacyColumn::Sex => &mut self.sex,
            LegacyColumn::NegationId => &mut self.negation_id,
            LegacyColumn::NegationName => &mut self.negation_name,
            LegacyColumn::Description => &mut self.description,
            LegacyColumn::Publication => &mut self.publication,
            LegacyColumn::AssignedBy => &mut self.assigned_by,
            LegacyColumn::DateCreated => &mut self.date_created,
            LegacyColumn::EntityId => &mut self.entity_id,
            LegacyColumn::EntityName => &mut self.entity_name,
            LegacyColumn::QualityId => &mut self.quality_id,
            LegacyColumn::QualityName => &mut self.quality_name,
            LegacyColumn::AddlEntityId => &mut self.addl_entity_id,
            LegacyColumn::AddlEntityName => &mut self.addl_entity_name,
            LegacyColumn::AbnormalId => &mut self.abnormal_id,
            LegacyColumn::AbnormalName => &mut self.abnormal_name,
            LegacyColumn::Orthologs => &mut self.orthologs,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_column() {
        let mut row = LegacyRow::new();
        for column in LegacyColumn::ALL {
            row.set(column, column.header());
        }
        for column in LegacyColumn::ALL {
            assert_eq!(row.get(column), column.header());
        }
    }
}
