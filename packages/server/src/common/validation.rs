//! Field validation helpers, applied before any store interaction.

use chrono::NaiveDate;

use super::FieldError;

/// Maximum length for user-supplied string fields.
pub const MAX_FIELD_LEN: usize = 100;

/// Checks that a required string field has between 1 and 100 characters.
pub fn check_length(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    let len = value.chars().count();
    if len < 1 || len > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            field,
            format!("must be between 1 and {MAX_FIELD_LEN} characters"),
        ));
    }
}

/// Parses an optional `YYYY-MM-DD` date, recording a field error on failure.
pub fn parse_date(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = value?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "must be a date in YYYY-MM-DD form"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_bounds() {
        let mut errors = Vec::new();
        check_length("name", "a", &mut errors);
        check_length("name", &"x".repeat(100), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn length_rejects_empty_and_oversized() {
        let mut errors = Vec::new();
        check_length("name", "", &mut errors);
        check_length("customer", &"x".repeat(101), &mut errors);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].field, "customer");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        check_length("name", &"å".repeat(100), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn date_parses_iso_form() {
        let mut errors = Vec::new();
        let date = parse_date("start_date", Some("2024-03-01"), &mut errors);
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(errors.is_empty());
    }

    #[test]
    fn date_rejects_other_forms() {
        let mut errors = Vec::new();
        assert!(parse_date("start_date", Some("03/01/2024"), &mut errors).is_none());
        assert!(parse_date("end_date", Some("2024-13-01"), &mut errors).is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn absent_date_is_not_an_error() {
        let mut errors = Vec::new();
        assert!(parse_date("start_date", None, &mut errors).is_none());
        assert!(errors.is_empty());
    }
}
