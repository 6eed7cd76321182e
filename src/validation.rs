//! Input validation for biometric form values.
//!
//! Rejects missing, non-numeric, zero and out-of-range values before any
//! computation runs. Accepted values pass through unchanged.

use crate::domain::{BiometricInput, Field, Sex, ValidatedInput};
use crate::error::ValidationError;

/// Parses raw form text into a biometric input.
///
/// Empty or absent fields are reported as missing, unparsable text as
/// non-numeric. Ranges are not checked here; see [`validate`].
pub fn parse_input(
    sex: Sex,
    age: Option<&str>,
    height: Option<&str>,
    weight: Option<&str>,
) -> Result<BiometricInput, ValidationError> {
    Ok(BiometricInput::new(
        sex,
        parse_field(Field::Age, age)?,
        parse_field(Field::Height, height)?,
        parse_field(Field::Weight, weight)?,
    ))
}

fn parse_field(field: Field, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    // Accept a decimal comma as typed on Hungarian keyboards
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: raw.to_string(),
        })
}

/// Validates age, height and weight against their inclusive ranges.
///
/// Fields are checked in the order age, height, weight; the first failure
/// is returned.
pub fn validate(input: &BiometricInput) -> Result<ValidatedInput, ValidationError> {
    check_field(Field::Age, input.age_years)?;
    check_field(Field::Height, input.height_cm)?;
    check_field(Field::Weight, input.weight_kg)?;

    Ok(ValidatedInput {
        sex: input.sex,
        age_years: input.age_years,
        height_cm: input.height_cm,
        weight_kg: input.weight_kg,
    })
}

fn check_field(field: Field, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }

    // Zero counts as an empty form field
    if value == 0.0 {
        return Err(ValidationError::Missing { field });
    }

    let (min, max) = field.range();
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: f64, height: f64, weight: f64) -> BiometricInput {
        BiometricInput::new(Sex::Male, age, height, weight)
    }

    #[test]
    fn test_valid_input_passes_through_unchanged() {
        let validated = validate(&input(30.5, 175.3, 80.25)).unwrap();
        assert_eq!(validated.sex(), Sex::Male);
        assert_eq!(validated.age_years(), 30.5);
        assert_eq!(validated.height_cm(), 175.3);
        assert_eq!(validated.weight_kg(), 80.25);
    }

    #[test]
    fn test_lower_bounds_inclusive() {
        assert!(validate(&input(10.0, 100.0, 30.0)).is_ok());
    }

    #[test]
    fn test_upper_bounds_inclusive() {
        assert!(validate(&input(110.0, 250.0, 300.0)).is_ok());
    }

    #[test]
    fn test_age_below_range_rejected() {
        let err = validate(&input(9.99, 175.0, 80.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: Field::Age,
                value: 9.99
            }
        );
    }

    #[test]
    fn test_weight_below_range_rejected() {
        let err = validate(&input(30.0, 175.0, 29.0)).unwrap_err();
        assert_eq!(err.field(), Some(Field::Weight));
    }

    #[test]
    fn test_height_above_range_rejected() {
        let err = validate(&input(30.0, 250.1, 80.0)).unwrap_err();
        assert_eq!(err.field(), Some(Field::Height));
    }

    #[test]
    fn test_zero_treated_as_missing() {
        let err = validate(&input(0.0, 175.0, 80.0)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: Field::Age });
    }

    #[test]
    fn test_nan_rejected_as_non_numeric() {
        let err = validate(&input(30.0, f64::NAN, 80.0)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotNumeric {
                field: Field::Height,
                ..
            }
        ));
    }

    #[test]
    fn test_first_failing_field_reported() {
        let err = validate(&input(5.0, 50.0, 10.0)).unwrap_err();
        assert_eq!(err.field(), Some(Field::Age));
    }

    #[test]
    fn test_parse_input_accepts_numbers() {
        let parsed = parse_input(Sex::Female, Some("25"), Some(" 165 "), Some("60,5")).unwrap();
        assert_eq!(parsed.age_years, 25.0);
        assert_eq!(parsed.height_cm, 165.0);
        assert_eq!(parsed.weight_kg, 60.5);
    }

    #[test]
    fn test_parse_input_missing_field() {
        let err = parse_input(Sex::Male, Some("30"), None, Some("80")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                field: Field::Height
            }
        );

        let err = parse_input(Sex::Male, Some("  "), Some("175"), Some("80")).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: Field::Age });
    }

    #[test]
    fn test_parse_input_non_numeric() {
        let err = parse_input(Sex::Male, Some("30"), Some("175"), Some("heavy")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotNumeric {
                field: Field::Weight,
                value: "heavy".to_string()
            }
        );
    }

    #[test]
    fn test_user_message_names_all_ranges() {
        let err = validate(&input(30.0, 175.0, 500.0)).unwrap_err();
        let message = err.user_message();
        assert!(message.contains("10–110"));
        assert!(message.contains("100–250 cm"));
        assert!(message.contains("30–300 kg"));
    }
}
