//! # Report Endpoints
//!
//! Customer statement, credit aging, stock levels and the user dashboard.
//! Payload keys vary between deployments; see [`crate::normalize`].

use shared::{CreditAgingRequest, DashboardRequest, Envelope, RequestEnvelope, Scope, StatementRequest};

use super::client::ApiClient;
use crate::core::error::Result;

pub const CUSTOMER_STATEMENT: &str = "customerstatement.php";
pub const CREDIT_AGING: &str = "creditagingreport.php";
pub const STOCKS: &str = "stocks.php";
pub const USER_DASHBOARD: &str = "userdashbord.php";

#[tracing::instrument(
    skip(client, request),
    fields(customerid = %request.customerid, sdate = %request.sdate, edate = %request.edate)
)]
pub async fn get_customer_statement(
    client: &ApiClient,
    request: &StatementRequest,
) -> Result<Envelope> {
    client
        .send(CUSTOMER_STATEMENT, &RequestEnvelope::from(request))
        .await
}

/// Outstanding invoices of a customer. `noofdays` and `condition` are sent
/// only when given.
#[tracing::instrument(skip(client, request), fields(customerid = %request.customerid))]
pub async fn get_credit_aging_report(
    client: &ApiClient,
    request: &CreditAgingRequest,
) -> Result<Envelope> {
    client.send(CREDIT_AGING, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(skip_all)]
pub async fn get_stocks(client: &ApiClient, scope: &Scope) -> Result<Envelope> {
    client.send(STOCKS, &RequestEnvelope::from(scope)).await
}

#[tracing::instrument(
    skip(client, request),
    fields(empid = %request.empid, sdate = %request.sdate, edate = %request.edate)
)]
pub async fn get_user_dashboard(client: &ApiClient, request: &DashboardRequest) -> Result<Envelope> {
    client
        .send(USER_DASHBOARD, &RequestEnvelope::from(request))
        .await
}
