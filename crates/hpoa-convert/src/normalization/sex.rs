use hpoa_model::{LegacyColumn, Sex};

use crate::ConversionError;

/// Parses one sex sub-field. Empty is `Ok(None)`.
pub fn parse_sex(column: LegacyColumn, raw: &str) -> Result<Option<Sex>, ConversionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Sex>()
        .map(Some)
        .map_err(|_| ConversionError::UnrecognizedSex {
            column,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_codes_in_any_case() {
        assert_eq!(parse_sex(LegacyColumn::SexId, "male").unwrap(), Some(Sex::Male));
        assert_eq!(parse_sex(LegacyColumn::Sex, "FEMALE").unwrap(), Some(Sex::Female));
        assert_eq!(parse_sex(LegacyColumn::SexName, "").unwrap(), None);
    }

    #[test]
    fn unknown_code_is_recoverable() {
        let error = parse_sex(LegacyColumn::SexName, "m").unwrap_err();
        assert!(!error.is_fatal());
        assert_eq!(error.column(), LegacyColumn::SexName);
    }
}
