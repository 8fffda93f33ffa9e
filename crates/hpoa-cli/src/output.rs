//! v2 small-file writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use hpoa_model::{CanonicalRecord, Frequency};

/// Column header of a v2 small file.
pub const V2_HEADER: [&str; 14] = [
    "#diseaseID",
    "diseaseName",
    "phenotypeID",
    "phenotypeName",
    "ageOfOnsetID",
    "ageOfOnsetName",
    "frequency",
    "sex",
    "negation",
    "modifier",
    "description",
    "publication",
    "evidence",
    "biocuration",
];

/// One record as v2 column values.
pub fn v2_fields(record: &CanonicalRecord) -> [String; 14] {
    [
        record.disease_id.clone(),
        record.disease_name.clone(),
        record.phenotype_id.to_string(),
        record.phenotype_label.clone(),
        record
            .age_of_onset_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        record.age_of_onset_label.clone().unwrap_or_default(),
        record
            .frequency
            .as_ref()
            .map(Frequency::render)
            .unwrap_or_default(),
        record
            .sex
            .map(|sex| sex.as_str().to_string())
            .unwrap_or_default(),
        record.negation_string().to_string(),
        record.modifier_string(),
        record.description.clone(),
        record.publication.clone(),
        record
            .evidence
            .map(|evidence| evidence.as_str().to_string())
            .unwrap_or_default(),
        record.biocuration(),
    ]
}

/// Writes records as tab-separated v2 rows, header first.
pub fn write_v2<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CanonicalRecord>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    writer.write_record(V2_HEADER).context("write v2 header")?;
    for record in records {
        writer
            .write_record(v2_fields(record))
            .with_context(|| format!("write v2 row for {}", record.phenotype_id))?;
    }
    writer.flush().context("flush v2 output")?;
    Ok(())
}

/// Writes a v2 file, creating the parent directory if needed.
pub fn write_v2_file<'a, I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a CanonicalRecord>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let file = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_v2(file, records).with_context(|| format!("write {}", path.display()))
}
