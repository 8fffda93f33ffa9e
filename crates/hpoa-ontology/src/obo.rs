//! Minimal OBO 1.4 reader.
//!
//! Only `[Term]` stanzas are read and only the tags the annotation pipeline
//! needs: `id`, `name`, `alt_id`, `is_a` and `is_obsolete`. Obsolete terms are
//! dropped; their ids are unknown to the resulting ontology unless another
//! term lists them as `alt_id`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use hpoa_model::TermId;

use crate::{Ontology, OntologyError, Term};

/// Load an ontology from an OBO file.
pub fn load_obo(path: &Path) -> Result<Ontology, OntologyError> {
    let file = File::open(path).map_err(|error| OntologyError::io(path, error))?;
    let source_name = path.display().to_string();
    let ontology = parse_obo(BufReader::new(file), &source_name)?;
    if ontology.is_empty() {
        return Err(OntologyError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        term_count = ontology.len(),
        alt_id_count = ontology.alt_id_count(),
        "ontology loaded"
    );
    Ok(ontology)
}

#[derive(Default)]
struct Stanza {
    start_line: usize,
    id: Option<TermId>,
    name: Option<String>,
    alt_ids: Vec<TermId>,
    parents: Vec<TermId>,
    obsolete: bool,
}

/// Parse OBO text from any reader. `source_name` is only used in errors.
pub fn parse_obo<R: BufRead>(reader: R, source_name: &str) -> Result<Ontology, OntologyError> {
    let mut ontology = Ontology::new();
    let mut current: Option<Stanza> = None;
    let mut obsolete_count = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|error| OntologyError::parse(source_name, line_no, error.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('!') {
            continue;
        }
        if trimmed.starts_with('[') {
            if let Some(stanza) = current.take()
                && finish_stanza(stanza, &mut ontology, source_name)?
            {
                obsolete_count += 1;
            }
            if trimmed == "[Term]" {
                current = Some(Stanza {
                    start_line: line_no,
                    ..Stanza::default()
                });
            }
            continue;
        }
        let Some(stanza) = current.as_mut() else {
            // Header tags and non-term stanzas.
            continue;
        };
        let Some((tag, value)) = trimmed.split_once(':') else {
            return Err(OntologyError::parse(
                source_name,
                line_no,
                format!("expected `tag: value`, got \"{trimmed}\""),
            ));
        };
        let value = strip_trailing_modifiers(value);
        match tag.trim() {
            "id" => stanza.id = Some(parse_id(value, source_name, line_no)?),
            "name" => stanza.name = Some(value.to_string()),
            "alt_id" => stanza.alt_ids.push(parse_id(value, source_name, line_no)?),
            "is_a" => stanza.parents.push(parse_id(value, source_name, line_no)?),
            "is_obsolete" => stanza.obsolete = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }
    if let Some(stanza) = current.take()
        && finish_stanza(stanza, &mut ontology, source_name)?
    {
        obsolete_count += 1;
    }
    debug!(source = source_name, obsolete_count, "skipped obsolete terms");
    Ok(ontology)
}

/// Adds the stanza to the ontology. Returns `true` if it was skipped as obsolete.
fn finish_stanza(
    stanza: Stanza,
    ontology: &mut Ontology,
    source_name: &str,
) -> Result<bool, OntologyError> {
    let Some(id) = stanza.id else {
        return Err(OntologyError::parse(
            source_name,
            stanza.start_line,
            "[Term] stanza without id",
        ));
    };
    if stanza.obsolete {
        return Ok(true);
    }
    let Some(label) = stanza.name else {
        return Err(OntologyError::parse(
            source_name,
            stanza.start_line,
            format!("term {id} has no name"),
        ));
    };
    ontology.add_term(Term {
        id,
        label,
        alt_ids: stanza.alt_ids,
        parents: stanza.parents,
    });
    Ok(false)
}

/// Drops `! comment` and `{qualifier}` suffixes from a tag value.
fn strip_trailing_modifiers(value: &str) -> &str {
    let value = value.split(" !").next().unwrap_or(value);
    let value = value.split(" {").next().unwrap_or(value);
    value.trim()
}

fn parse_id(value: &str, source_name: &str, line_no: usize) -> Result<TermId, OntologyError> {
    TermId::new(value).map_err(|error| OntologyError::parse(source_name, line_no, error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OntologyView;

    const SAMPLE: &str = "format-version: 1.2\n\
ontology: hp\n\
\n\
[Term]\n\
id: HP:0000001\n\
name: All\n\
\n\
[Term]\n\
id: HP:0012823\n\
name: Clinical modifier\n\
is_a: HP:0000001 ! All\n\
\n\
[Term]\n\
id: HP:0025303\n\
name: Episodic\n\
alt_id: HP:0025304\n\
is_a: HP:0012823 ! Clinical modifier\n\
\n\
[Term]\n\
id: HP:0000000\n\
name: obsolete thing\n\
is_obsolete: true\n\
\n\
[Typedef]\n\
id: part_of\n\
name: part of\n";

    #[test]
    fn parses_terms_alt_ids_and_edges() {
        let ontology = parse_obo(SAMPLE.as_bytes(), "sample").expect("parse");
        assert_eq!(ontology.len(), 3);
        let episodic = TermId::hpo("0025303");
        assert_eq!(ontology.primary_id(&TermId::hpo("0025304")), Some(episodic.clone()));
        assert_eq!(ontology.label(&episodic), Some("Episodic"));
        assert!(ontology.descendants(&TermId::hpo("0012823")).contains(&episodic));
    }

    #[test]
    fn obsolete_terms_are_skipped() {
        let ontology = parse_obo(SAMPLE.as_bytes(), "sample").expect("parse");
        assert!(!ontology.contains(&TermId::hpo("0000000")));
    }

    #[test]
    fn stanza_without_id_is_an_error() {
        let text = "[Term]\nname: orphan\n";
        let error = parse_obo(text.as_bytes(), "broken").unwrap_err();
        assert!(error.to_string().contains("without id"), "{error}");
    }

    #[test]
    fn strips_comments_and_qualifiers() {
        assert_eq!(
            strip_trailing_modifiers(" HP:0000001 {source=\"x\"} ! All"),
            "HP:0000001"
        );
    }
}
