//! Closed vocabularies of the v2 annotation format.
//!
//! Each enum mirrors a column that only admits a fixed set of values in the
//! v2 small files. Parsing helpers live next to the type so the accepted
//! spellings are listed in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TermId;

/// Source database of a disease, derived from the disease id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiseaseDatabase {
    Omim,
    Orphanet,
    Decipher,
}

impl DiseaseDatabase {
    /// Determines the database from a disease id such as `OMIM:100100`.
    ///
    /// Dispatch is purely on the prefix: `OMIM`, `ORPHA` and `DECIPHER`.
    pub fn from_disease_id(id: &str) -> Option<Self> {
        if id.starts_with("OMIM") {
            Some(DiseaseDatabase::Omim)
        } else if id.starts_with("ORPHA") {
            Some(DiseaseDatabase::Orphanet)
        } else if id.starts_with("DECIPHER") {
            Some(DiseaseDatabase::Decipher)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseDatabase::Omim => "OMIM",
            DiseaseDatabase::Orphanet => "ORPHANET",
            DiseaseDatabase::Decipher => "DECIPHER",
        }
    }
}

impl fmt::Display for DiseaseDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evidence code of an annotation.
///
/// - **IEA**: inferred from electronic annotation
/// - **ICE**: individual clinical experience
/// - **TAS**: traceable author statement
/// - **PCS**: published clinical study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceCode {
    #[serde(rename = "IEA")]
    Iea,
    #[serde(rename = "ICE")]
    Ice,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "PCS")]
    Pcs,
}

impl EvidenceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceCode::Iea => "IEA",
            EvidenceCode::Ice => "ICE",
            EvidenceCode::Tas => "TAS",
            EvidenceCode::Pcs => "PCS",
        }
    }
}

impl fmt::Display for EvidenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvidenceCode {
    type Err = String;

    /// Exact, case-sensitive match. Legacy files wrote these codes in upper
    /// case only; anything else is treated as not well-formed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "IEA" => Ok(EvidenceCode::Iea),
            "ICE" => Ok(EvidenceCode::Ice),
            "TAS" => Ok(EvidenceCode::Tas),
            "PCS" => Ok(EvidenceCode::Pcs),
            _ => Err(format!("Unknown evidence code: {s}")),
        }
    }
}

/// Categorical frequency terms from the HPO "Frequency" subontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrequencyCategory {
    /// The subontology root, used for "variable" frequencies.
    FrequencyRoot,
    Obligate,
    VeryFrequent,
    Frequent,
    Occasional,
    VeryRare,
}

impl FrequencyCategory {
    pub fn curie(&self) -> &'static str {
        match self {
            FrequencyCategory::FrequencyRoot => "HP:0040279",
            FrequencyCategory::Obligate => "HP:0040280",
            FrequencyCategory::VeryFrequent => "HP:0040281",
            FrequencyCategory::Frequent => "HP:0040282",
            FrequencyCategory::Occasional => "HP:0040283",
            FrequencyCategory::VeryRare => "HP:0040284",
        }
    }

    pub fn term_id(&self) -> TermId {
        TermId(self.curie().to_string())
    }
}

impl fmt::Display for FrequencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.curie())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex code: {s}")),
        }
    }
}

/// Quality-control observations made while converting a legacy row.
///
/// The serialized names are consumed by curation tooling and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QcCode {
    /// The phenotype (or onset) id was an alternate id and was replaced.
    UpdatingAltId,
    /// The creation date was rewritten to `YYYY-MM-DD`.
    UpdatedDateFormat,
    /// Gene columns carried data that the v2 format drops.
    GotGeneData,
    /// Entity/quality columns carried data that the v2 format drops.
    GotEqItem,
    /// A description clause was turned into a modifier term.
    CreatedModifier,
    /// None of the evidence columns held a well-formed code.
    DidNotFindEvidenceCode,
    /// The phenotype label was replaced by the current ontology label.
    UpdatingHpoLabel,
}

impl QcCode {
    pub const ALL: [QcCode; 7] = [
        QcCode::UpdatingAltId,
        QcCode::UpdatedDateFormat,
        QcCode::GotGeneData,
        QcCode::GotEqItem,
        QcCode::CreatedModifier,
        QcCode::DidNotFindEvidenceCode,
        QcCode::UpdatingHpoLabel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QcCode::UpdatingAltId => "UPDATING_ALT_ID",
            QcCode::UpdatedDateFormat => "UPDATED_DATE_FORMAT",
            QcCode::GotGeneData => "GOT_GENE_DATA",
            QcCode::GotEqItem => "GOT_EQ_ITEM",
            QcCode::CreatedModifier => "CREATED_MODIFIER",
            QcCode::DidNotFindEvidenceCode => "DID_NOT_FIND_EVIDENCE_CODE",
            QcCode::UpdatingHpoLabel => "UPDATING_HPO_LABEL",
        }
    }

    /// Short human-readable explanation, used in summaries.
    pub fn description(&self) -> &'static str {
        match self {
            QcCode::UpdatingAltId => "alternate term id replaced by primary id",
            QcCode::UpdatedDateFormat => "creation date rewritten to YYYY-MM-DD",
            QcCode::GotGeneData => "gene data dropped",
            QcCode::GotEqItem => "entity/quality data dropped",
            QcCode::CreatedModifier => "modifier created from description",
            QcCode::DidNotFindEvidenceCode => "no well-formed evidence code",
            QcCode::UpdatingHpoLabel => "phenotype label replaced by ontology label",
        }
    }

    /// Cosmetic codes do not count as issues on their own.
    pub fn is_cosmetic(&self) -> bool {
        matches!(self, QcCode::UpdatedDateFormat)
    }
}

impl fmt::Display for QcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QcCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        QcCode::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| format!("Unknown QC code: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disease_database_from_prefix() {
        assert_eq!(
            DiseaseDatabase::from_disease_id("OMIM:100100"),
            Some(DiseaseDatabase::Omim)
        );
        assert_eq!(
            DiseaseDatabase::from_disease_id("ORPHA:558"),
            Some(DiseaseDatabase::Orphanet)
        );
        assert_eq!(
            DiseaseDatabase::from_disease_id("DECIPHER:1"),
            Some(DiseaseDatabase::Decipher)
        );
        assert_eq!(DiseaseDatabase::from_disease_id("MONDO:0000001"), None);
        assert_eq!(DiseaseDatabase::from_disease_id("omim:100100"), None);
    }

    #[test]
    fn evidence_code_is_case_sensitive() {
        assert_eq!("TAS".parse::<EvidenceCode>().unwrap(), EvidenceCode::Tas);
        assert_eq!(" PCS ".parse::<EvidenceCode>().unwrap(), EvidenceCode::Pcs);
        assert!("tas".parse::<EvidenceCode>().is_err());
        assert!("bogus".parse::<EvidenceCode>().is_err());
    }

    #[test]
    fn qc_code_names_round_trip() {
        for code in QcCode::ALL {
            assert_eq!(code.as_str().parse::<QcCode>().unwrap(), code);
        }
        let json = serde_json::to_string(&QcCode::CreatedModifier).unwrap();
        assert_eq!(json, "\"CREATED_MODIFIER\"");
    }

    #[test]
    fn frequency_terms() {
        assert_eq!(FrequencyCategory::VeryRare.curie(), "HP:0040284");
        assert_eq!(
            FrequencyCategory::Obligate.term_id().as_str(),
            "HP:0040280"
        );
    }
}
