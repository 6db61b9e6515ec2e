//! # Validation Utilities
//!
//! Input presence checks. Anything deeper is the backend's job.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a text amount parses to a number greater than zero.
pub fn validate_positive_amount(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err("Please enter a valid amount".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("WF01", "Office code").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Office code").unwrap_err(),
            "Office code cannot be empty"
        );
    }

    #[test]
    fn test_positive_amount() {
        assert_eq!(validate_positive_amount("150.50").unwrap(), 150.5);
        assert!(validate_positive_amount("0").is_err());
        assert!(validate_positive_amount("-5").is_err());
        assert!(validate_positive_amount("abc").is_err());
        assert!(validate_positive_amount("").is_err());
    }
}
