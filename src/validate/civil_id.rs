//! Civil ID and admin form validation

use crate::error::ValidationError;

/// Number of digits in a civil ID
pub const CIVIL_ID_LENGTH: usize = 12;

/// Keeps ASCII digits only and truncates to `CIVIL_ID_LENGTH` characters.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CIVIL_ID_LENGTH)
        .collect()
}

/// Returns true iff `id` has exactly `CIVIL_ID_LENGTH` characters.
pub fn is_complete(id: &str) -> bool {
    id.chars().count() == CIVIL_ID_LENGTH
}

/// Validates a driver login submission and returns the normalized civil ID.
pub fn validate_civil_id(input: &str) -> Result<String, ValidationError> {
    let civil_id = normalize(input);
    if civil_id.is_empty() {
        return Err(ValidationError::EmptyCivilId);
    }
    if !is_complete(&civil_id) {
        return Err(ValidationError::IncompleteCivilId);
    }
    Ok(civil_id)
}

/// Same as [`validate_civil_id`], with the driver search wording for empty input.
pub fn validate_query_civil_id(input: &str) -> Result<String, ValidationError> {
    match validate_civil_id(input) {
        Err(ValidationError::EmptyCivilId) => Err(ValidationError::EmptyQueryCivilId),
        other => other,
    }
}

/// Both admin fields must contain something other than whitespace.
pub fn validate_admin_fields(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::EmptyAdminFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(normalize("2926-2404 7141"), "292624047141");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_truncates() {
        assert_eq!(normalize("2926240471419999"), "292624047141");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not accepted as civil ID digits
        assert_eq!(normalize("١٢٣123"), "123");
    }

    #[test]
    fn test_normalized_output_invariant() {
        let inputs = [
            "",
            "1",
            "12345678901",
            "123456789012",
            "1234567890123",
            "  99 88 77 66 55 44 33 ",
            "x1y2z3",
            "\u{0}\n12",
        ];
        for input in inputs {
            let out = normalize(input);
            assert!(out.chars().all(|c| c.is_ascii_digit()), "{:?}", input);
            assert!(out.len() <= CIVIL_ID_LENGTH, "{:?}", input);
            assert_eq!(is_complete(&out), out.len() == CIVIL_ID_LENGTH);
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete("123456789012"));
        assert!(!is_complete("12345678901"));
        assert!(!is_complete(""));
    }

    #[test]
    fn test_validate_civil_id() {
        assert_eq!(
            validate_civil_id("292624047141"),
            Ok("292624047141".to_string())
        );
        assert_eq!(validate_civil_id("   "), Err(ValidationError::EmptyCivilId));
        assert_eq!(
            validate_civil_id("2926"),
            Err(ValidationError::IncompleteCivilId)
        );
    }

    #[test]
    fn test_validate_query_civil_id_wording() {
        assert_eq!(
            validate_query_civil_id(""),
            Err(ValidationError::EmptyQueryCivilId)
        );
        assert_eq!(
            validate_query_civil_id("123"),
            Err(ValidationError::IncompleteCivilId)
        );
    }

    #[test]
    fn test_validate_admin_fields() {
        assert!(validate_admin_fields("admin1", "secret").is_ok());
        assert_eq!(
            validate_admin_fields(" ", "secret"),
            Err(ValidationError::EmptyAdminFields)
        );
        assert_eq!(
            validate_admin_fields("admin1", ""),
            Err(ValidationError::EmptyAdminFields)
        );
    }
}
