//! Report rows: customer statement, credit aging, stock levels, dashboard.

use serde::Serialize;
use shared::Envelope;

use super::{amount, first_text, text, Normalize, Record};

mod statement {
    pub const ID: &[&str] = &["expincId", "id", "transactionid", "voucherid"];
    pub const DATE: &[&str] = &["pur_date", "date", "transactiondate", "voucherdate"];
    pub const KIND: &[&str] = &[
        "alltype",
        "alltypes",
        "pinvtype",
        "type",
        "vouchertype",
        "description",
        "narration",
    ];
    pub const DEBIT: &[&str] = &["incout", "incout1", "expout", "debit"];
    pub const CREDIT: &[&str] = &["expin", "incin1", "credit"];
    pub const BALANCE: &[&str] = &["ob", "balance"];
}

mod aging {
    pub const INVOICE: &[&str] = &["invoiceNumber", "invoice", "invoiceno", "inv_no"];
    pub const DATE: &[&str] = &["date", "pur_date", "inv_date", "invoicedate"];
    pub const TOTAL: &[&str] = &["total", "totalamt", "invoice_total", "amount"];
    pub const BALANCE: &[&str] = &["balance", "netamount", "outstanding", "pending"];
    pub const DAYS: &[&str] = &["daysOverdue", "days_overdue", "days"];
}

mod stock {
    pub const NAME: &[&str] = &["productname", "product_name", "itemname"];
    pub const QUANTITY: &[&str] = &["quantity", "stockqty"];
    pub const PRICE: &[&str] = &["price", "rate", "mrp"];
}

mod dashboard {
    pub const PAYLOAD: &[&str] = &["summary", "data", "userdashboard"];
    pub const TOTAL: &[&str] = &["totalcollected", "collectionamt"];
    pub const RECEIPTS: &[&str] = &["receiptamount", "collectionrpamt", "receiptamt"];
    pub const CHEQUES: &[&str] = &["chequeamount", "collectioncqamt"];
    pub const POST_DATED: &[&str] = &["pdcamt"];

    pub const RECENT_AMOUNT: &[&str] = &["amount", "collectionamt"];
    pub const RECENT_KIND: &[&str] = &["collectiontype", "payment"];
    pub const RECENT_DATE: &[&str] = &["collection_date", "collectiondate"];
    pub const RECENT_REFERENCE: &[&str] = &["chequeno", "receiptno"];
    pub const RECENT_CUSTOMER: &[&str] = &["customer_name", "customername"];
    pub const RECENT_STATUS: &[&str] = &["collectionstatus"];
}

// region:    --- Customer statement

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

impl Normalize for StatementLine {
    const PAYLOAD: &'static [&'static str] = &["statement", "statements", "data"];

    fn from_record(record: &Record) -> Self {
        Self {
            id: text(record, statement::ID),
            date: text(record, statement::DATE),
            kind: text(record, statement::KIND),
            debit: amount(record, statement::DEBIT),
            credit: amount(record, statement::CREDIT),
            balance: amount(record, statement::BALANCE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatementTotals {
    pub debit: f64,
    pub credit: f64,
    /// Running balance of the last line; zero for an empty statement.
    pub closing_balance: f64,
}

impl StatementTotals {
    pub fn of(lines: &[StatementLine]) -> Self {
        Self {
            debit: lines.iter().map(|l| l.debit).sum(),
            credit: lines.iter().map(|l| l.credit).sum(),
            closing_balance: lines.last().map(|l| l.balance).unwrap_or_default(),
        }
    }
}

// endregion: --- Customer statement

// region:    --- Credit aging

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgingLine {
    pub invoice: String,
    pub date: String,
    pub total: f64,
    pub balance: f64,
    pub days_overdue: f64,
}

impl Normalize for AgingLine {
    const PAYLOAD: &'static [&'static str] = &["creditage", "data", "aging", "statement"];

    fn from_record(record: &Record) -> Self {
        Self {
            invoice: text(record, aging::INVOICE),
            date: text(record, aging::DATE),
            total: amount(record, aging::TOTAL),
            balance: amount(record, aging::BALANCE),
            days_overdue: amount(record, aging::DAYS),
        }
    }
}

/// Sum of outstanding balances.
pub fn total_outstanding(lines: &[AgingLine]) -> f64 {
    lines.iter().map(|l| l.balance).sum()
}

// endregion: --- Credit aging

// region:    --- Stocks

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLine {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: f64,
    pub price: f64,
    /// `quantity * price`.
    pub value: f64,
}

impl Normalize for StockLine {
    const PAYLOAD: &'static [&'static str] = &["stocks"];

    fn from_record(record: &Record) -> Self {
        let quantity = amount(record, stock::QUANTITY);
        let price = amount(record, stock::PRICE);
        Self {
            name: text(record, stock::NAME),
            brand: first_text(record, &["brand"]),
            category: first_text(record, &["category"]),
            quantity,
            price,
            value: quantity * price,
        }
    }
}

// endregion: --- Stocks

// region:    --- Dashboard

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_collected: f64,
    pub receipts: f64,
    pub cheques: f64,
    pub post_dated: f64,
}

impl DashboardSummary {
    /// Summary object of a dashboard reply; all zeros when there is none.
    pub fn from_envelope(envelope: &Envelope) -> Self {
        envelope
            .object(dashboard::PAYLOAD)
            .map(|record| Self::from_record(&record))
            .unwrap_or_default()
    }

    pub fn from_record(record: &Record) -> Self {
        Self {
            total_collected: amount(record, dashboard::TOTAL),
            receipts: amount(record, dashboard::RECEIPTS),
            cheques: amount(record, dashboard::CHEQUES),
            post_dated: amount(record, dashboard::POST_DATED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentCollection {
    pub amount: f64,
    pub kind: String,
    pub date: Option<String>,
    /// Cheque or receipt number; `#<position>` when neither is present.
    pub reference: String,
    pub customer: String,
    pub status: String,
}

impl Normalize for RecentCollection {
    const PAYLOAD: &'static [&'static str] = &["recentcollection"];

    fn from_record(record: &Record) -> Self {
        let kind = first_text(record, dashboard::RECENT_KIND).unwrap_or_default();
        let status = status_label(&kind, first_text(record, dashboard::RECENT_STATUS).as_deref());
        Self {
            amount: amount(record, dashboard::RECENT_AMOUNT),
            date: first_text(record, dashboard::RECENT_DATE),
            reference: first_text(record, dashboard::RECENT_REFERENCE).unwrap_or_default(),
            customer: text(record, dashboard::RECENT_CUSTOMER),
            status,
            kind,
        }
    }

    fn list(envelope: &Envelope) -> Vec<Self> {
        envelope
            .records(Self::PAYLOAD)
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let mut row = Self::from_record(record);
                if row.reference.is_empty() {
                    row.reference = format!("#{}", idx + 1);
                }
                row
            })
            .collect()
    }
}

/// Cheques are pending until cleared regardless of the reported status.
fn status_label(kind: &str, status: Option<&str>) -> String {
    if kind.eq_ignore_ascii_case("cheque") {
        return "Pending".to_string();
    }
    let status = status.unwrap_or_default();
    match status.to_ascii_lowercase().as_str() {
        "completed" | "success" => "Completed".to_string(),
        "pending" => "Pending".to_string(),
        "failed" | "rejected" => "Failed".to_string(),
        "" => "Active".to_string(),
        _ => status.to_string(),
    }
}

// endregion: --- Dashboard
