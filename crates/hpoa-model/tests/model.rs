//! Tests for hpoa-model types.

use std::collections::BTreeSet;

use hpoa_model::{
    CanonicalRecord, DiseaseDatabase, EvidenceCode, Frequency, FrequencyCategory, QcCode,
    QcIssues, Sex, TermId,
};

fn sample_record() -> CanonicalRecord {
    let mut modifiers = BTreeSet::new();
    modifiers.insert(TermId::hpo("0031796"));
    modifiers.insert(TermId::hpo("0012828"));
    CanonicalRecord {
        disease_id: "OMIM:100100".to_string(),
        disease_name: "PRUNE BELLY SYNDROME".to_string(),
        database: DiseaseDatabase::Omim,
        phenotype_id: TermId::hpo("0001250"),
        phenotype_label: "Seizure".to_string(),
        age_of_onset_id: None,
        age_of_onset_label: None,
        evidence: Some(EvidenceCode::Tas),
        frequency: Some(Frequency::Category(FrequencyCategory::VeryRare)),
        sex: Some(Sex::Female),
        negated: true,
        modifiers,
        description: "OMIM-CS:NEUROLOGIC > SEIZURES".to_string(),
        publication: "OMIM:100100".to_string(),
        curator: "HPO:probinson".to_string(),
        date_created: "2018-01-23".to_string(),
        qc: [QcCode::UpdatedDateFormat].into_iter().collect::<QcIssues>(),
    }
}

#[test]
fn record_renders_v2_fields() {
    let record = sample_record();
    assert_eq!(record.modifier_string(), "HP:0012828;HP:0031796");
    assert_eq!(record.negation_string(), "NOT");
    assert_eq!(record.biocuration(), "HPO:probinson[2018-01-23]");
    assert_eq!(
        record.frequency.as_ref().map(Frequency::render).as_deref(),
        Some("HP:0040284")
    );
    assert!(!record.has_issues());
}

#[test]
fn raw_frequency_has_no_term() {
    let frequency = Frequency::Raw("3/10".to_string());
    assert_eq!(frequency.term_id(), None);
    assert_eq!(frequency.raw(), Some("3/10"));
    assert_eq!(frequency.render(), "3/10");
}

#[test]
fn record_serializes() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"database\":\"OMIM\""));
    assert!(json.contains("\"qc\":[\"UPDATED_DATE_FORMAT\"]"));
    let round: CanonicalRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}
