//! # Master Data Endpoints
//!
//! Financial years, areas, employees and other office-level lookups.

use shared::{EmployeeRequest, Envelope, Office, RequestEnvelope, Scope};

use super::client::ApiClient;
use crate::core::error::Result;

pub const FINANCIAL_YEARS: &str = "financialyears.php";
pub const AREAS: &str = "areas.php";
pub const EMPLOYEES: &str = "salesman.php";
pub const COUNTER_LIST: &str = "counterlist.php";
pub const COMMON_PRIVILEGES: &str = "commonprivileges.php";
pub const NEW_UNIT: &str = "newunit.php";

#[tracing::instrument(skip(client, request), fields(employeeid = %request.employeeid))]
pub async fn get_financial_years(
    client: &ApiClient,
    request: &EmployeeRequest,
) -> Result<Envelope> {
    client
        .send(FINANCIAL_YEARS, &RequestEnvelope::from(request))
        .await
}

/// Sales areas of the office. Payload key `areas` (some deployments: `data`).
#[tracing::instrument(skip(client, office), fields(officecode = %office.officecode))]
pub async fn get_areas(client: &ApiClient, office: &Office) -> Result<Envelope> {
    client.send(AREAS, &RequestEnvelope::from(office)).await
}

#[tracing::instrument(skip_all)]
pub async fn get_employees(client: &ApiClient, scope: &Scope) -> Result<Envelope> {
    client.send(EMPLOYEES, &RequestEnvelope::from(scope)).await
}

#[tracing::instrument(skip(client, request), fields(employeeid = %request.employeeid))]
pub async fn get_counter_list(client: &ApiClient, request: &EmployeeRequest) -> Result<Envelope> {
    client.send(COUNTER_LIST, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(skip_all)]
pub async fn get_common_privileges(client: &ApiClient, office: &Office) -> Result<Envelope> {
    client
        .send(COMMON_PRIVILEGES, &RequestEnvelope::from(office))
        .await
}

#[tracing::instrument(skip_all)]
pub async fn get_new_unit(client: &ApiClient, office: &Office) -> Result<Envelope> {
    client.send(NEW_UNIT, &RequestEnvelope::from(office)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;
    use crate::testing::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_areas_is_office_scoped() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(AREAS, json!({"flag": true, "areas": [{"id": "3", "name": "North"}]}));
        let client = ApiClient::new("https://erp.test", transport.clone(), Arc::new(MemoryStore::new()));

        let office = Office { officecode: "WF01".to_string(), officeid: "1".to_string() };
        let envelope = get_areas(&client, &office).await.unwrap();

        assert_eq!(envelope.records(&["areas"]).len(), 1);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.fields.len(), 2);
        assert_eq!(sent.field("financialyearid"), None);
    }
}
