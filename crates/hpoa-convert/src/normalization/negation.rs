use hpoa_model::LegacyColumn;

use crate::ConversionError;

const NEGATION_CODE: &str = "NOT";

/// Parses one negation sub-field: `NOT` in any case is `true`, empty is `false`.
pub fn parse_negation(column: LegacyColumn, raw: &str) -> Result<bool, ConversionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(false);
    }
    if value.eq_ignore_ascii_case(NEGATION_CODE) {
        return Ok(true);
    }
    Err(ConversionError::UnrecognizedNegation {
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_in_any_case() {
        assert!(parse_negation(LegacyColumn::NegationId, "not").unwrap());
        assert!(parse_negation(LegacyColumn::NegationName, " NOT ").unwrap());
        assert!(!parse_negation(LegacyColumn::NegationId, "").unwrap());
    }

    #[test]
    fn anything_else_is_recoverable() {
        let error = parse_negation(LegacyColumn::NegationName, "no").unwrap_err();
        assert!(!error.is_fatal());
    }
}
