use crate::error::{Result, TrackerError};

/// A meal or workout form, validated and converted.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub name: String,
    pub calories: f64,
}

/// Validate the name and calorie fields of an add-entry form.
///
/// Both fields are required; calories must parse as a number.
pub fn parse_entry_form(name: &str, calories: &str) -> Result<EntryForm> {
    let name = name.trim();
    let calories = calories.trim();

    if name.is_empty() || calories.is_empty() {
        return Err(TrackerError::Validation(
            "Please fill in all fields.".to_string(),
        ));
    }

    Ok(EntryForm {
        name: name.to_string(),
        calories: parse_number(calories)?,
    })
}

/// Validate the daily limit field.
pub fn parse_limit(limit: &str) -> Result<f64> {
    let limit = limit.trim();
    if limit.is_empty() {
        return Err(TrackerError::Validation(
            "Please add a daily limit.".to_string(),
        ));
    }
    parse_number(limit)
}

fn parse_number(input: &str) -> Result<f64> {
    input
        .parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid number: {}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = parse_entry_form("  Oatmeal ", "350").unwrap();
        assert_eq!(form.name, "Oatmeal");
        assert_eq!(form.calories, 350.0);
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            parse_entry_form("", "100"),
            Err(TrackerError::Validation(_))
        ));
        assert!(matches!(
            parse_entry_form("Oatmeal", "   "),
            Err(TrackerError::Validation(_))
        ));
    }

    #[test]
    fn test_non_numeric_calories_rejected() {
        let err = parse_entry_form("Oatmeal", "lots").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid number: lots");
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("2500").unwrap(), 2500.0);
        assert!(parse_limit("").is_err());
        assert!(parse_limit("abc").is_err());
    }
}
