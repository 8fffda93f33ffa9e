use std::io::Write;

use hpoa_ingest::{IngestError, read_legacy_file, read_legacy_rows};
use hpoa_model::LegacyColumn;

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write file");
    file
}

const HEADER: &str = "#Disease ID\tDisease Name\tGene ID\tPhenotype ID\tPhenotype Name\tEvidence ID\tDescription\tDate Created\tAssigned by\tLegacy Notes";

#[test]
fn reads_rows_with_line_numbers() {
    let contents = format!(
        "{HEADER}\n\
OMIM:100100\tPRUNE BELLY\t\tHP:0001250\tSeizure\tIEA\tMODIFIER:episodic;\"quoted\" text\t2018-01-23\tHPO:probinson\tx\n\
\n\
OMIM:100100\tPRUNE BELLY\t5432\tHP:0001263\tGDD\tTAS\t\t23.01.2018\tHPO:skoehler\n"
    );
    let file = temp_file(&contents);
    let table = read_legacy_file(file.path()).expect("read legacy file");

    assert_eq!(table.source, file.path());
    assert_eq!(table.unknown_headers().collect::<Vec<_>>(), vec!["Legacy Notes"]);
    assert_eq!(table.lines.len(), 2);

    let first = &table.lines[0];
    assert_eq!(first.line, 2);
    assert_eq!(first.row.disease_id, "OMIM:100100");
    assert_eq!(first.row.description, "MODIFIER:episodic;\"quoted\" text");
    assert_eq!(first.row.get(LegacyColumn::AssignedBy), "HPO:probinson");

    // Blank line 3 is skipped; short rows leave trailing columns empty.
    let second = &table.lines[1];
    assert_eq!(second.line, 4);
    assert_eq!(second.row.gene_id, "5432");
    assert_eq!(second.row.date_created, "23.01.2018");
    assert_eq!(second.row.orthologs, "");
}

#[test]
fn header_names_are_matched_loosely() {
    let contents = "DISEASE_ID\tdisease name\tphenotype id\nORPHA:558\tMarfan\tHP:0001166\n";
    let table = read_legacy_rows(contents.as_bytes(), "inline").expect("read rows");
    assert_eq!(table.lines[0].row.disease_id, "ORPHA:558");
    assert_eq!(table.lines[0].row.phenotype_id, "HP:0001166");
}

#[test]
fn missing_required_column_is_an_error() {
    let contents = "Disease ID\tDisease Name\nOMIM:1\tX\n";
    let error = read_legacy_rows(contents.as_bytes(), "inline").unwrap_err();
    assert!(matches!(
        error,
        IngestError::MissingColumn {
            column: LegacyColumn::PhenotypeId,
            ..
        }
    ));
}

#[test]
fn empty_input_has_no_header() {
    let error = read_legacy_rows("\n\n".as_bytes(), "blank").unwrap_err();
    assert!(matches!(error, IngestError::MissingHeader { .. }));
}

#[test]
fn missing_file_names_the_path() {
    let error = read_legacy_file(std::path::Path::new("/nonexistent/legacy.tab")).unwrap_err();
    assert!(error.to_string().contains("/nonexistent/legacy.tab"));
}
