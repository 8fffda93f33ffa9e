mod common;

use common::{clean_row, fixture_ontology};
use hpoa_convert::normalization::{normalize_date, normalize_disease_id, resolve_hpo_term};
use hpoa_convert::{ConversionContext, ConversionOptions, convert_row};
use hpoa_model::{DiseaseDatabase, LegacyColumn, LegacyRow};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prefixed_disease_ids_map_to_their_database(
        (prefix, expected) in prop_oneof![
            Just(("OMIM", DiseaseDatabase::Omim)),
            Just(("ORPHA", DiseaseDatabase::Orphanet)),
            Just(("DECIPHER", DiseaseDatabase::Decipher)),
        ],
        local in "[0-9]{1,7}",
    ) {
        let id = format!("{prefix}:{local}");
        let (normalized, database) = normalize_disease_id(&id).unwrap();
        prop_assert_eq!(normalized, id);
        prop_assert_eq!(database, expected);
    }

    #[test]
    fn canonical_dates_are_left_alone(
        year in 1990i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let input = format!("{year:04}-{month:02}-{day:02}");
        let date = normalize_date(&input).unwrap();
        prop_assert!(!date.reformatted);
        prop_assert_eq!(date.value, input);
    }

    #[test]
    fn rewritten_dates_are_stable(
        year in 1990i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let first = normalize_date(&format!("{day:02}.{month:02}.{year:04}")).unwrap();
        prop_assert!(first.reformatted);
        let second = normalize_date(&first.value).unwrap();
        prop_assert!(!second.reformatted);
        prop_assert_eq!(second.value, first.value);
    }
}

#[test]
fn primary_ids_resolve_without_replacement() {
    let ontology = fixture_ontology();
    let first = resolve_hpo_term(&ontology, LegacyColumn::PhenotypeId, "HP:0002279").unwrap();
    assert!(first.replaced_alt_id);
    let second = resolve_hpo_term(&ontology, LegacyColumn::PhenotypeId, first.id.as_str()).unwrap();
    assert!(!second.replaced_alt_id);
    assert_eq!(second.id, first.id);
}

#[test]
fn reconverting_canonical_output_adds_no_qc_codes() {
    let ontology = fixture_ontology();
    let context = ConversionContext::new(&ontology, ConversionOptions::default());
    let messy = LegacyRow {
        phenotype_id: "HP:0002279".to_string(),
        phenotype_name: "seizures".to_string(),
        date_created: "2018.01.23".to_string(),
        ..clean_row()
    };
    let record = convert_row(&context, &messy).unwrap().record;
    assert_eq!(record.qc.len(), 3);

    let canonical = LegacyRow {
        phenotype_id: record.phenotype_id.to_string(),
        phenotype_name: record.phenotype_label.clone(),
        date_created: record.date_created.clone(),
        ..clean_row()
    };
    let again = convert_row(&context, &canonical).unwrap().record;
    assert!(again.qc.is_empty());
}
