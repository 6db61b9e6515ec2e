//! Collection (receipt) rows.

use serde::Serialize;

use super::{amount, first_text, text, Normalize, Record};

const ID: &[&str] = &["receiptid", "id"];
const DATE: &[&str] = &["rdate", "date"];
const CUSTOMER: &[&str] = &["customer_name", "customername", "account_name", "acc_name"];
const AMOUNT: &[&str] = &["amount"];
const PAYMENT: &[&str] = &["payment"];
const CHEQUE: &[&str] = &["chequeno"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    /// Receipt id; needed to delete the collection.
    pub id: Option<String>,
    pub date: String,
    pub customer: String,
    pub amount: f64,
    pub payment: String,
    pub cheque_no: Option<String>,
}

impl Normalize for Collection {
    const PAYLOAD: &'static [&'static str] = &["collections"];

    fn from_record(record: &Record) -> Self {
        Self {
            id: first_text(record, ID),
            date: text(record, DATE),
            customer: text(record, CUSTOMER),
            amount: amount(record, AMOUNT),
            payment: text(record, PAYMENT),
            cheque_no: first_text(record, CHEQUE),
        }
    }
}

/// Sum of collected amounts.
pub fn total(collections: &[Collection]) -> f64 {
    collections.iter().map(|c| c.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Envelope;

    #[test]
    fn test_collections_and_total() {
        let envelope = Envelope::new(json!({"flag": true, "collections": [
            {"receiptid": 991, "rdate": "2024-04-10", "customer_name": "Anil Stores",
             "amount": "1500", "payment": "Cheque", "chequeno": "000123"},
            {"id": "992", "date": "2024-04-11", "acc_name": "Bharat Traders", "amount": 250.5,
             "payment": "Cash", "chequeno": ""},
        ]}));

        let rows = Collection::list(&envelope);
        assert_eq!(rows[0].id.as_deref(), Some("991"));
        assert_eq!(rows[0].cheque_no.as_deref(), Some("000123"));
        assert_eq!(rows[1].customer, "Bharat Traders");
        assert_eq!(rows[1].cheque_no, None);
        assert_eq!(total(&rows), 1750.5);
    }
}
