//! Customer rows for the customers screen.

use serde::Serialize;

use super::{amount, first_text, text, Normalize, Record};

const ID: &[&str] = &["customerid", "id"];
const NAME: &[&str] = &["customer_name", "name", "account_name"];
const AREA: &[&str] = &["area_name", "day", "areas"];
const BALANCE: &[&str] = &["amount", "balance", "currbalance", "ca_amount"];
const LEDGER: &[&str] = &["account_id", "customeraccountid"];
const MOBILE: &[&str] = &["mobileno", "whatsappno"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    /// Empty when the backend sent none; customer ids are never shown.
    pub id: String,
    pub name: String,
    pub area: String,
    pub balance: f64,
    /// Ledger account used as `custledger` when recording a collection.
    pub ledger: Option<String>,
    pub mobile: Option<String>,
}

impl Normalize for Customer {
    const PAYLOAD: &'static [&'static str] = &["customers"];

    fn from_record(record: &Record) -> Self {
        Self {
            id: first_text(record, ID).unwrap_or_default(),
            name: text(record, NAME),
            area: text(record, AREA),
            balance: amount(record, BALANCE),
            ledger: first_text(record, LEDGER),
            mobile: first_text(record, MOBILE),
        }
    }
}

/// Customers whose name contains `query` (case-insensitive) and, when given,
/// whose area equals `area`.
pub fn filter<'a>(customers: &'a [Customer], query: &str, area: Option<&str>) -> Vec<&'a Customer> {
    let needle = query.trim().to_lowercase();
    customers
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .filter(|c| area.map_or(true, |a| c.area == a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Envelope;

    #[test]
    fn test_customers_resolve_across_deployments() {
        let envelope = Envelope::new(json!({
            "flag": true,
            "customers": [
                {"customerid": "77", "customer_name": "Anil Stores", "area_name": "North",
                 "amount": "1,200.00", "account_id": "310", "mobileno": "9876543210"},
                {"id": 78, "account_name": "Bharat Traders", "day": "Monday", "currbalance": 45.5},
                "garbage",
                {}
            ]
        }));

        let customers = Customer::list(&envelope);
        assert_eq!(customers.len(), 3);

        assert_eq!(customers[0].name, "Anil Stores");
        assert_eq!(customers[0].balance, 1200.0);
        assert_eq!(customers[0].ledger.as_deref(), Some("310"));

        assert_eq!(customers[1].id, "78");
        assert_eq!(customers[1].name, "Bharat Traders");
        assert_eq!(customers[1].area, "Monday");
        assert_eq!(customers[1].balance, 45.5);
        assert_eq!(customers[1].mobile, None);

        assert_eq!(customers[2].name, "N/A");
        assert_eq!(customers[2].balance, 0.0);
    }

    #[test]
    fn test_filter_by_name_and_area() {
        let envelope = Envelope::new(json!({"customers": [
            {"customer_name": "Anil Stores", "area_name": "North"},
            {"customer_name": "Anitha Agencies", "area_name": "South"},
            {"customer_name": "Bharat Traders", "area_name": "North"},
        ]}));
        let customers = Customer::list(&envelope);

        let names = |v: Vec<&Customer>| v.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(filter(&customers, "ANI", None)), vec!["Anil Stores", "Anitha Agencies"]);
        assert_eq!(names(filter(&customers, "", Some("North"))), vec!["Anil Stores", "Bharat Traders"]);
        assert_eq!(names(filter(&customers, "an", Some("South"))), vec!["Anitha Agencies"]);
    }
}
