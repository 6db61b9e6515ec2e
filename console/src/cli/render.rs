//! Plain-text tables for normalized rows.

use std::fmt::Write;

use shared::Session;

use crate::normalize::collections::total;
use crate::normalize::reports::total_outstanding;
use crate::normalize::{
    AgingLine, Area, Collection, Customer, DashboardSummary, RecentCollection, StatementLine,
    StatementTotals, StockLine,
};

/// `₹ 1,234.50`
pub fn money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::new();
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("₹ {sign}{grouped}.{cents}")
}

pub fn session(session: &Session) -> String {
    let mut out = String::new();
    let name = if session.display_name.is_empty() {
        &session.username
    } else {
        &session.display_name
    };
    let _ = writeln!(out, "{} ({})", name, session.username);
    let _ = writeln!(out, "Office:   {} [{}]", session.office_name, session.office_code);
    if !session.location.is_empty() {
        let _ = writeln!(out, "Location: {}", session.location);
    }
    if let Some(year) = &session.financial_year_id {
        let _ = writeln!(out, "Year:     {year}");
    }
    out
}

pub fn customers(rows: &[Customer]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<32} {:<16} {:>16}", "ID", "NAME", "AREA", "BALANCE");
    for c in rows {
        let _ = writeln!(out, "{:<8} {:<32} {:<16} {:>16}", c.id, c.name, c.area, money(c.balance));
    }
    let _ = write!(out, "{} customers", rows.len());
    out
}

pub fn collections(rows: &[Collection]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<12} {:<32} {:<8} {:>16}", "RECEIPT", "DATE", "CUSTOMER", "MODE", "AMOUNT");
    for c in rows {
        let mode = match &c.cheque_no {
            Some(no) => format!("{} {}", c.payment, no),
            None => c.payment.clone(),
        };
        let _ = writeln!(
            out,
            "{:<10} {:<12} {:<32} {:<8} {:>16}",
            c.id.as_deref().unwrap_or("-"),
            c.date,
            c.customer,
            mode,
            money(c.amount)
        );
    }
    let _ = write!(out, "Total: {}", money(total(rows)));
    out
}

pub fn statement(rows: &[StatementLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<14} {:>14} {:>14} {:>14}", "DATE", "TYPE", "DEBIT", "CREDIT", "BALANCE");
    for l in rows {
        let _ = writeln!(
            out,
            "{:<12} {:<14} {:>14} {:>14} {:>14}",
            l.date,
            l.kind,
            money(l.debit),
            money(l.credit),
            money(l.balance)
        );
    }
    let totals = StatementTotals::of(rows);
    let _ = write!(
        out,
        "Debit {}  Credit {}  Closing {}",
        money(totals.debit),
        money(totals.credit),
        money(totals.closing_balance)
    );
    out
}

pub fn aging(rows: &[AgingLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<12} {:>14} {:>14} {:>6}", "INVOICE", "DATE", "TOTAL", "BALANCE", "DAYS");
    for l in rows {
        let _ = writeln!(
            out,
            "{:<14} {:<12} {:>14} {:>14} {:>6}",
            l.invoice,
            l.date,
            money(l.total),
            money(l.balance),
            l.days_overdue
        );
    }
    let _ = write!(out, "Outstanding: {}", money(total_outstanding(rows)));
    out
}

pub fn stocks(rows: &[StockLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<32} {:<16} {:>10} {:>14} {:>16}", "PRODUCT", "BRAND", "QTY", "PRICE", "VALUE");
    for s in rows {
        let _ = writeln!(
            out,
            "{:<32} {:<16} {:>10} {:>14} {:>16}",
            s.name,
            s.brand.as_deref().unwrap_or("-"),
            s.quantity,
            money(s.price),
            money(s.value)
        );
    }
    let _ = write!(out, "{} items", rows.len());
    out
}

pub fn dashboard_summary(summary: &DashboardSummary) -> String {
    format!(
        "Collected {}  Receipts {}  Cheques {}  PDC {}",
        money(summary.total_collected),
        money(summary.receipts),
        money(summary.cheques),
        money(summary.post_dated)
    )
}

pub fn recent_collections(rows: &[RecentCollection]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<12} {:<32} {:<10} {:>16}", "REF", "DATE", "CUSTOMER", "STATUS", "AMOUNT");
    for r in rows {
        let _ = writeln!(
            out,
            "{:<10} {:<12} {:<32} {:<10} {:>16}",
            r.reference,
            r.date.as_deref().unwrap_or("-"),
            r.customer,
            r.status,
            money(r.amount)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn areas(rows: &[Area]) -> String {
    rows.iter()
        .map(|a| match &a.id {
            Some(id) => format!("{id:<6} {}", a.name),
            None => format!("{:<6} {}", "-", a.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
