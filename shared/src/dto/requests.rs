//! Parameter sets for the sales, collection, master-data and report endpoints.
//!
//! Nearly every call is scoped by office code, office id and financial year id;
//! [`Scope`] carries those three so callers do not repeat them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::envelope::RequestEnvelope;

/// Tenant and accounting-period scope required by most endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scope {
    pub officecode: String,
    pub officeid: String,
    pub financialyearid: String,
}

impl Scope {
    fn envelope(&self) -> RequestEnvelope {
        RequestEnvelope::new()
            .field("officecode", &self.officecode)
            .field("officeid", &self.officeid)
            .field("financialyearid", &self.financialyearid)
    }

    /// Office part of the scope, for endpoints that are not period-bound.
    pub fn office(&self) -> Office {
        Office {
            officecode: self.officecode.clone(),
            officeid: self.officeid.clone(),
        }
    }
}

/// `stocks.php`, `salesaccounts.php`, `PriceType.php` and `salesman.php` take
/// the scope and nothing else.
impl From<&Scope> for RequestEnvelope {
    fn from(scope: &Scope) -> Self {
        scope.envelope()
    }
}

/// Office identifiers without a financial year.
///
/// `areas.php`, `commonprivileges.php`, `newunit.php`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Office {
    pub officecode: String,
    pub officeid: String,
}

impl From<&Office> for RequestEnvelope {
    fn from(office: &Office) -> Self {
        RequestEnvelope::new()
            .field("officecode", &office.officecode)
            .field("officeid", &office.officeid)
    }
}

/// `financialyears.php`, `counterlist.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRequest {
    pub office: Office,
    pub employeeid: String,
    pub usertypeid: String,
}

impl From<&EmployeeRequest> for RequestEnvelope {
    fn from(req: &EmployeeRequest) -> Self {
        RequestEnvelope::from(&req.office)
            .field("employeeid", &req.employeeid)
            .field("usertypeid", &req.usertypeid)
    }
}

/// `customerbranddiscount.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandDiscountRequest {
    pub office: Office,
    pub customerid: String,
    pub brandid: String,
}

impl From<&BrandDiscountRequest> for RequestEnvelope {
    fn from(req: &BrandDiscountRequest) -> Self {
        // Field order differs from the other office calls.
        RequestEnvelope::new()
            .field("officeid", &req.office.officeid)
            .field("officecode", &req.office.officecode)
            .field("customerid", &req.customerid)
            .field("brandid", &req.brandid)
    }
}

/// `customers.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomersRequest {
    pub scope: Scope,
    pub empid: String,
}

impl From<&CustomersRequest> for RequestEnvelope {
    fn from(req: &CustomersRequest) -> Self {
        req.scope.envelope().field("empid", &req.empid)
    }
}

/// `collections.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionsRequest {
    pub scope: Scope,
    pub empid: String,
    pub sdate: String,
    pub edate: String,
}

impl From<&CollectionsRequest> for RequestEnvelope {
    fn from(req: &CollectionsRequest) -> Self {
        req.scope
            .envelope()
            .field("empid", &req.empid)
            .field("sdate", &req.sdate)
            .field("edate", &req.edate)
    }
}

/// Payment mode of a collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMode {
    Cash,
    Cheque,
    /// Bank transfer; the backend calls it `NEFT`.
    Transfer,
}

impl PaymentMode {
    pub fn as_wire(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Cheque => "Cheque",
            PaymentMode::Transfer => "NEFT",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "cheque" | "check" => Ok(PaymentMode::Cheque),
            "transfer" | "neft" => Ok(PaymentMode::Transfer),
            other => Err(format!("Unknown payment mode: {}", other)),
        }
    }
}

/// `newcollection.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCollectionRequest {
    pub scope: Scope,
    /// Receipt date, `YYYY-MM-DD`.
    pub rdate: String,
    pub empid: String,
    pub payment: PaymentMode,
    /// Amount as typed by the user; validated to be a positive number.
    pub amount: String,
    pub customerid: String,
    pub chequeno: String,
    pub chequedate: String,
    pub remarks: String,
    /// Customer ledger account id.
    pub custledger: String,
}

impl From<&NewCollectionRequest> for RequestEnvelope {
    fn from(req: &NewCollectionRequest) -> Self {
        req.scope
            .envelope()
            .field("rdate", &req.rdate)
            .field("empid", &req.empid)
            .field("empidc", &req.empid)
            .field("payment", req.payment.as_wire())
            .field("amount", req.amount.trim())
            .field("customerid", &req.customerid)
            .field("chequeno", &req.chequeno)
            .field("chequedate", &req.chequedate)
            .field("remarks", &req.remarks)
            .field("custledger", &req.custledger)
    }
}

/// `deletecollection.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCollectionRequest {
    pub scope: Scope,
    pub receiptid: String,
}

impl From<&DeleteCollectionRequest> for RequestEnvelope {
    fn from(req: &DeleteCollectionRequest) -> Self {
        req.scope.envelope().field("receiptid", &req.receiptid)
    }
}

/// `customerstatement.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementRequest {
    pub scope: Scope,
    pub customerid: String,
    pub sdate: String,
    pub edate: String,
}

impl From<&StatementRequest> for RequestEnvelope {
    fn from(req: &StatementRequest) -> Self {
        req.scope
            .envelope()
            .field("customerid", &req.customerid)
            .field("sdate", &req.sdate)
            .field("edate", &req.edate)
    }
}

/// `creditagingreport.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditAgingRequest {
    pub scope: Scope,
    pub customerid: String,
    pub noofdays: Option<String>,
    pub condition: Option<String>,
}

impl From<&CreditAgingRequest> for RequestEnvelope {
    fn from(req: &CreditAgingRequest) -> Self {
        req.scope
            .envelope()
            .field("customerid", &req.customerid)
            .optional("noofdays", req.noofdays.clone())
            .optional("condition", req.condition.clone())
    }
}

/// `userdashbord.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardRequest {
    pub scope: Scope,
    pub empid: String,
    pub sdate: String,
    pub edate: String,
}

impl From<&DashboardRequest> for RequestEnvelope {
    fn from(req: &DashboardRequest) -> Self {
        req.scope
            .envelope()
            .field("empid", &req.empid)
            .field("sdate", &req.sdate)
            .field("edate", &req.edate)
    }
}

/// `salesitems.php`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesItemsRequest {
    pub scope: Scope,
    pub column: String,
    pub barcode: String,
}

impl SalesItemsRequest {
    /// Full item list: column `0`, no barcode filter.
    pub fn all(scope: Scope) -> Self {
        Self {
            scope,
            column: "0".to_string(),
            barcode: String::new(),
        }
    }
}

impl From<&SalesItemsRequest> for RequestEnvelope {
    fn from(req: &SalesItemsRequest) -> Self {
        req.scope
            .envelope()
            .field("column", &req.column)
            .field("barcode", &req.barcode)
    }
}
