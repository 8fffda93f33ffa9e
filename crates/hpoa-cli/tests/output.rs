use std::collections::BTreeSet;

use hpoa_cli::output::{write_v2, write_v2_file};
use hpoa_model::{
    CanonicalRecord, DiseaseDatabase, EvidenceCode, Frequency, FrequencyCategory, QcCode, QcIssues,
    Sex, TermId,
};

fn record() -> CanonicalRecord {
    CanonicalRecord {
        disease_id: "OMIM:100100".to_string(),
        disease_name: "PRUNE BELLY SYNDROME".to_string(),
        database: DiseaseDatabase::Omim,
        phenotype_id: TermId::hpo("0001250"),
        phenotype_label: "Seizure".to_string(),
        age_of_onset_id: Some(TermId::hpo("0003593")),
        age_of_onset_label: Some("Infantile onset".to_string()),
        evidence: Some(EvidenceCode::Tas),
        frequency: Some(Frequency::Category(FrequencyCategory::VeryRare)),
        sex: Some(Sex::Male),
        negated: false,
        modifiers: BTreeSet::from([TermId::hpo("0025303"), TermId::hpo("0012828")]),
        description: "OMIM-CS:NEUROLOGIC > SEIZURES".to_string(),
        publication: "OMIM:100100".to_string(),
        curator: "HPO:probinson".to_string(),
        date_created: "2018-01-23".to_string(),
        qc: [QcCode::CreatedModifier].into_iter().collect::<QcIssues>(),
    }
}

#[test]
fn writes_v2_rows() {
    let sparse = CanonicalRecord {
        age_of_onset_id: None,
        age_of_onset_label: None,
        evidence: None,
        frequency: Some(Frequency::Raw("3/10".to_string())),
        sex: None,
        negated: true,
        modifiers: BTreeSet::new(),
        description: String::new(),
        ..record()
    };
    let mut buffer = Vec::new();
    write_v2(&mut buffer, [&record(), &sparse]).expect("write v2");
    let text = String::from_utf8(buffer).expect("utf8");
    insta::assert_snapshot!(text, @r"
    #diseaseID	diseaseName	phenotypeID	phenotypeName	ageOfOnsetID	ageOfOnsetName	frequency	sex	negation	modifier	description	publication	evidence	biocuration
    OMIM:100100	PRUNE BELLY SYNDROME	HP:0001250	Seizure	HP:0003593	Infantile onset	HP:0040284	MALE		HP:0012828;HP:0025303	OMIM-CS:NEUROLOGIC > SEIZURES	OMIM:100100	TAS	HPO:probinson[2018-01-23]
    OMIM:100100	PRUNE BELLY SYNDROME	HP:0001250	Seizure			3/10		NOT			OMIM:100100		HPO:probinson[2018-01-23]
    ");
}

#[test]
fn creates_output_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("v2").join("OMIM-100100.tab");
    write_v2_file(&path, [&record()]).expect("write file");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("#diseaseID\t"));
}
