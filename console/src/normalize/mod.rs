//! # Response Normalizers
//!
//! The backend names the same logical field differently depending on the
//! deployment and the report (`customer_name` vs `name` vs `account_name`).
//! Every entity declares an ordered alias list per logical field; one resolver
//! walks the list and takes the first alias holding a usable value.
//!
//! Normalization is total: a missing or unusable field becomes `"N/A"` for
//! text and `0` for amounts, and records that are not objects are skipped.
//!
//! ```rust
//! use erp_console::normalize::{amount, text, Record};
//! use serde_json::json;
//!
//! let record: Record = serde_json::from_value(json!({"name": "", "account_name": "Anil"})).unwrap();
//! assert_eq!(text(&record, &["customer_name", "name", "account_name"]), "Anil");
//! assert_eq!(amount(&record, &["amount", "balance"]), 0.0);
//! ```

pub mod collections;
pub mod customers;
pub mod master;
pub mod reports;

use serde_json::{Map, Value};
use shared::utils::{value_as_f64, value_as_text};
use shared::Envelope;

pub use collections::Collection;
pub use customers::Customer;
pub use master::Area;
pub use reports::{AgingLine, DashboardSummary, RecentCollection, StatementLine, StatementTotals, StockLine};

/// One raw record from a payload array.
pub type Record = Map<String, Value>;

/// Text placeholder for absent fields.
pub const PLACEHOLDER: &str = "N/A";

/// First alias whose value renders as non-empty text.
pub fn first_text(record: &Record, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find_map(value_as_text)
}

/// First alias whose value parses as a finite number.
pub fn first_amount(record: &Record, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find_map(value_as_f64)
}

/// Resolved text, or [`PLACEHOLDER`].
pub fn text(record: &Record, aliases: &[&str]) -> String {
    text_or(record, aliases, PLACEHOLDER)
}

pub fn text_or(record: &Record, aliases: &[&str], default: &str) -> String {
    first_text(record, aliases).unwrap_or_else(|| default.to_string())
}

/// Resolved amount, or zero.
pub fn amount(record: &Record, aliases: &[&str]) -> f64 {
    first_amount(record, aliases).unwrap_or(0.0)
}

/// A normalized entity with a declared payload location.
pub trait Normalize: Sized {
    /// Payload keys that may hold the record array, in preference order.
    const PAYLOAD: &'static [&'static str];

    fn from_record(record: &Record) -> Self;

    /// Normalize every record in the first payload key holding an array.
    fn list(envelope: &Envelope) -> Vec<Self> {
        envelope
            .records(Self::PAYLOAD)
            .iter()
            .map(Self::from_record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_usable_alias_wins() {
        let r = record(json!({"b": "  ", "c": "third", "d": "fourth"}));
        assert_eq!(text(&r, &["a", "b", "c", "d"]), "third");
    }

    #[test]
    fn test_amount_skips_unparseable_aliases() {
        let r = record(json!({"amount": "n/a", "balance": "1,250.50"}));
        assert_eq!(amount(&r, &["amount", "balance"]), 1250.5);
    }

    #[test]
    fn test_zero_is_a_present_value() {
        let r = record(json!({"amount": 0, "balance": 90}));
        assert_eq!(amount(&r, &["amount", "balance"]), 0.0);
    }

    #[test]
    fn test_defaults_for_unexpected_shapes() {
        let r = record(json!({"name": {"first": "x"}, "amount": [1, 2]}));
        assert_eq!(text(&r, &["name"]), PLACEHOLDER);
        assert_eq!(amount(&r, &["amount"]), 0.0);
        assert_eq!(text_or(&r, &["missing"], "Unknown"), "Unknown");
    }
}
