//! Frequency vocabulary.
//!
//! Legacy files used a handful of words for frequency. They map onto the HPO
//! frequency subontology through a fixed table; values that start with a
//! digit (`3/10`, `45%`) are kept as raw numeric frequencies.

use hpoa_model::{Frequency, FrequencyCategory};

use crate::ConversionError;

const FREQUENCY_TABLE: &[(&str, FrequencyCategory)] = &[
    ("very rare", FrequencyCategory::VeryRare),
    ("rare", FrequencyCategory::VeryRare),
    ("frequent", FrequencyCategory::Frequent),
    ("occasional", FrequencyCategory::Occasional),
    ("variable", FrequencyCategory::FrequencyRoot),
    ("typical", FrequencyCategory::Frequent),
    ("very frequent", FrequencyCategory::VeryFrequent),
    ("common", FrequencyCategory::Frequent),
    ("hallmark", FrequencyCategory::VeryFrequent),
    ("obligate", FrequencyCategory::Obligate),
];

/// Case-insensitive lookup in the frequency table.
pub fn frequency_category_for(word: &str) -> Option<FrequencyCategory> {
    FREQUENCY_TABLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(word))
        .map(|(_, category)| *category)
}

/// Normalizes the frequency column. Empty means no frequency.
pub fn normalize_frequency(raw: &str) -> Result<Option<Frequency>, ConversionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Ok(Some(Frequency::Raw(value.to_string())));
    }
    frequency_category_for(value)
        .map(|category| Some(Frequency::Category(category)))
        .ok_or_else(|| ConversionError::UnmappedFrequency {
            value: value.to_string(),
        })
}
