//! Column-ordered assembly of one legacy row into a v2 record.
//!
//! [`RecordBuilder`] is fed one column at a time in [`LegacyColumn::ALL`]
//! order. Each step normalizes its column, may raise QC codes and may fail.
//! [`RecordBuilder::finalize`] consumes the builder, runs the end-of-record
//! checks and yields the immutable [`CanonicalRecord`].

use std::collections::BTreeSet;

use tracing::warn;

use hpoa_model::{
    CanonicalRecord, DiseaseDatabase, EvidenceCode, Frequency, LegacyColumn, LegacyRow, QcCode,
    QcIssues, Sex, TermId,
};

use crate::description::mine_description;
use crate::normalization::{
    normalize_date, normalize_disease_id, normalize_disease_name, normalize_frequency,
    parse_evidence_code, parse_negation, parse_sex, resolve_hpo_term,
};
use crate::{ConversionContext, ConversionError};

/// A converted row: the record plus any recoverable errors met on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub record: CanonicalRecord,
    pub warnings: Vec<ConversionError>,
}

/// Converts one legacy row.
pub fn convert_row(
    context: &ConversionContext<'_>,
    row: &LegacyRow,
) -> Result<Conversion, ConversionError> {
    let mut builder = RecordBuilder::new(context);
    for column in LegacyColumn::ALL {
        builder.apply(column, row.get(column))?;
    }
    builder.finalize()
}

/// Record under construction.
#[derive(Debug)]
pub struct RecordBuilder<'c> {
    context: &'c ConversionContext<'c>,
    disease: Option<(String, DiseaseDatabase)>,
    disease_name: Option<String>,
    phenotype: Option<TermId>,
    phenotype_name: String,
    onset: Option<(TermId, String)>,
    evidence: Option<EvidenceCode>,
    frequency: Option<Frequency>,
    sex: Option<Sex>,
    negated: bool,
    modifiers: BTreeSet<TermId>,
    description: String,
    publication: String,
    curator: String,
    date_created: Option<String>,
    qc: QcIssues,
    warnings: Vec<ConversionError>,
}

impl<'c> RecordBuilder<'c> {
    pub fn new(context: &'c ConversionContext<'c>) -> Self {
        Self {
            context,
            disease: None,
            disease_name: None,
            phenotype: None,
            phenotype_name: String::new(),
            onset: None,
            evidence: None,
            frequency: None,
            sex: None,
            negated: false,
            modifiers: BTreeSet::new(),
            description: String::new(),
            publication: String::new(),
            curator: String::new(),
            date_created: None,
            qc: QcIssues::new(),
            warnings: Vec::new(),
        }
    }

    /// Consumes one column value. Fatal errors are returned; recoverable ones
    /// are kept on the builder and reported with the finished record.
    pub fn apply(&mut self, column: LegacyColumn, value: &str) -> Result<(), ConversionError> {
        match column {
            LegacyColumn::DiseaseId => self.disease = Some(normalize_disease_id(value)?),
            LegacyColumn::DiseaseName => self.disease_name = Some(normalize_disease_name(value)?),
            LegacyColumn::GeneId
            | LegacyColumn::GeneName
            | LegacyColumn::Genotype
            | LegacyColumn::GeneSymbol => self.flag_if_present(value, QcCode::GotGeneData),
            LegacyColumn::PhenotypeId => self.apply_phenotype_id(value)?,
            LegacyColumn::PhenotypeName => self.phenotype_name = value.trim().to_string(),
            LegacyColumn::AgeOfOnsetId => self.apply_onset_id(value)?,
            LegacyColumn::AgeOfOnsetName => {
                // The onset label always comes from the ontology.
            }
            LegacyColumn::EvidenceId | LegacyColumn::EvidenceName | LegacyColumn::Evidence => {
                if self.evidence.is_none() {
                    self.evidence = parse_evidence_code(value);
                }
            }
            LegacyColumn::Frequency => self.frequency = normalize_frequency(value)?,
            LegacyColumn::SexId | LegacyColumn::SexName | LegacyColumn::Sex => {
                match parse_sex(column, value) {
                    Ok(Some(sex)) => {
                        self.sex.get_or_insert(sex);
                    }
                    Ok(None) => {}
                    Err(error) => self.recover(error),
                }
            }
            LegacyColumn::NegationId | LegacyColumn::NegationName => {
                match parse_negation(column, value) {
                    Ok(negated) => self.negated |= negated,
                    Err(error) => self.recover(error),
                }
            }
            LegacyColumn::Description => self.apply_description(value)?,
            LegacyColumn::Publication => self.publication = value.trim().to_string(),
            LegacyColumn::AssignedBy => self.curator = value.trim().to_string(),
            LegacyColumn::DateCreated => {
                let date = normalize_date(value)?;
                if date.reformatted {
                    self.qc.raise(QcCode::UpdatedDateFormat);
                }
                self.date_created = Some(date.value);
            }
            LegacyColumn::EntityId
            | LegacyColumn::EntityName
            | LegacyColumn::QualityId
            | LegacyColumn::QualityName
            | LegacyColumn::AddlEntityId
            | LegacyColumn::AddlEntityName
            | LegacyColumn::AbnormalId
            | LegacyColumn::AbnormalName
            | LegacyColumn::Orthologs => self.flag_if_present(value, QcCode::GotEqItem),
        }
        Ok(())
    }

    fn flag_if_present(&mut self, value: &str, code: QcCode) {
        if !value.trim().is_empty() {
            self.qc.raise(code);
        }
    }

    fn recover(&mut self, error: ConversionError) {
        warn!(column = %error.column(), error = %error, "recoverable conversion error");
        self.warnings.push(error);
    }

    fn apply_phenotype_id(&mut self, value: &str) -> Result<(), ConversionError> {
        let resolved = resolve_hpo_term(self.context.ontology(), LegacyColumn::PhenotypeId, value)?;
        if resolved.replaced_alt_id {
            self.qc.raise(QcCode::UpdatingAltId);
        }
        self.phenotype = Some(resolved.id);
        Ok(())
    }

    fn apply_onset_id(&mut self, value: &str) -> Result<(), ConversionError> {
        if value.trim().is_empty() {
            return Ok(());
        }
        let resolved = resolve_hpo_term(self.context.ontology(), LegacyColumn::AgeOfOnsetId, value)?;
        if resolved.replaced_alt_id {
            self.qc.raise(QcCode::UpdatingAltId);
        }
        self.onset = Some((resolved.id, resolved.label));
        Ok(())
    }

    fn apply_description(&mut self, value: &str) -> Result<(), ConversionError> {
        let mined = mine_description(value, self.context.modifiers())?;
        if mined.clinical_synopsis && self.evidence.is_none() {
            self.evidence = Some(EvidenceCode::Tas);
        }
        if self.frequency.is_none()
            && let Some(category) = mined.frequency_hint
        {
            self.frequency = Some(Frequency::Category(category));
        }
        if mined.created_modifier {
            self.qc.raise(QcCode::CreatedModifier);
        }
        self.modifiers.extend(mined.modifiers);
        self.description = mined.residual;
        Ok(())
    }

    /// Runs the end-of-record checks and emits the record.
    ///
    /// A missing evidence code raises `DID_NOT_FIND_EVIDENCE_CODE`. A phenotype
    /// label that differs from the ontology label is replaced and raises
    /// `UPDATING_HPO_LABEL`.
    pub fn finalize(self) -> Result<Conversion, ConversionError> {
        let Self {
            context,
            disease,
            disease_name,
            phenotype,
            phenotype_name,
            onset,
            evidence,
            frequency,
            sex,
            negated,
            modifiers,
            description,
            publication,
            curator,
            date_created,
            mut qc,
            warnings,
        } = self;

        let missing = |column| ConversionError::MissingField { column };
        let (disease_id, database) = disease.ok_or_else(|| missing(LegacyColumn::DiseaseId))?;
        let disease_name = disease_name.ok_or_else(|| missing(LegacyColumn::DiseaseName))?;
        let phenotype_id = phenotype.ok_or_else(|| missing(LegacyColumn::PhenotypeId))?;
        let date_created = date_created.ok_or_else(|| missing(LegacyColumn::DateCreated))?;

        if evidence.is_none() {
            qc.raise(QcCode::DidNotFindEvidenceCode);
        }
        let phenotype_label = match context.ontology().label(&phenotype_id) {
            Some(current) if current != phenotype_name => {
                qc.raise(QcCode::UpdatingHpoLabel);
                current.to_string()
            }
            _ => phenotype_name,
        };
        let (age_of_onset_id, age_of_onset_label) = onset.unzip();

        Ok(Conversion {
            record: CanonicalRecord {
                disease_id,
                disease_name,
                database,
                phenotype_id,
                phenotype_label,
                age_of_onset_id,
                age_of_onset_label,
                evidence,
                frequency,
                sex,
                negated,
                modifiers,
                description,
                publication,
                curator,
                date_created,
                qc,
            },
            warnings,
        })
    }
}
