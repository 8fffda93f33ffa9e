use hpoa_model::DiseaseDatabase;

use crate::ConversionError;

/// Trims the disease id and derives its source database from the prefix.
pub fn normalize_disease_id(raw: &str) -> Result<(String, DiseaseDatabase), ConversionError> {
    let id = raw.trim();
    DiseaseDatabase::from_disease_id(id)
        .map(|database| (id.to_string(), database))
        .ok_or_else(|| ConversionError::UnknownDiseaseDatabase { id: id.to_string() })
}

pub fn normalize_disease_name(raw: &str) -> Result<String, ConversionError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ConversionError::EmptyDiseaseName);
    }
    Ok(name.to_string())
}
