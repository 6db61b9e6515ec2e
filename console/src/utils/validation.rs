/// Validation utilities for user input

use lib_utils::{parse_ymd, validate_not_empty, validate_positive_amount};
use shared::PaymentMode;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// `Err` with the message when invalid.
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(message) if !self.is_valid => Err(message),
            _ => Ok(()),
        }
    }
}

/// Validate the login form
pub fn validate_login(username: &str, password: &str, officecode: &str) -> ValidationResult {
    for (value, field) in [
        (username, "Username"),
        (password, "Password"),
        (officecode, "Office code"),
    ] {
        if let Err(message) = validate_not_empty(value, field) {
            return ValidationResult::err(message);
        }
    }
    ValidationResult::ok()
}

/// Validate a collection entry before it is submitted
pub fn validate_collection(amount: &str, payment: PaymentMode, cheque_no: &str) -> ValidationResult {
    if let Err(message) = validate_positive_amount(amount) {
        return ValidationResult::err(message);
    }

    if payment == PaymentMode::Cheque && cheque_no.trim().is_empty() {
        return ValidationResult::err("Please enter cheque number for cheque payment");
    }

    ValidationResult::ok()
}

/// Validate a `YYYY-MM-DD` date range
pub fn validate_date_range(from: &str, to: &str) -> ValidationResult {
    let (start, end) = match (parse_ymd(from), parse_ymd(to)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => return ValidationResult::err(e.to_string()),
    };

    if start > end {
        return ValidationResult::err("Start date must be on or before end date");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_all_fields() {
        assert!(validate_login("admin", "1234", "WF01").is_valid);

        let result = validate_login("admin", "1234", "  ");
        assert_eq!(result.error.as_deref(), Some("Office code cannot be empty"));
    }

    #[test]
    fn test_collection_amount_must_be_positive() {
        for amount in ["", "0", "-5", "abc"] {
            let result = validate_collection(amount, PaymentMode::Cash, "");
            assert_eq!(result.error.as_deref(), Some("Please enter a valid amount"), "amount: {amount:?}");
        }
        assert!(validate_collection("250.50", PaymentMode::Transfer, "").is_valid);
    }

    #[test]
    fn test_cheque_requires_number() {
        let result = validate_collection("100", PaymentMode::Cheque, " ");
        assert_eq!(
            result.into_result(),
            Err("Please enter cheque number for cheque payment".to_string())
        );
        assert!(validate_collection("100", PaymentMode::Cheque, "000123").is_valid);
    }

    #[test]
    fn test_date_range() {
        assert!(validate_date_range("2024-04-01", "2024-04-30").is_valid);
        assert!(validate_date_range("2024-04-01", "2024-04-01").is_valid);
        assert!(!validate_date_range("2024-05-01", "2024-04-30").is_valid);
        assert!(!validate_date_range("01/04/2024", "2024-04-30").is_valid);
    }
}
