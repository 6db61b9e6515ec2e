//! # Sales Endpoints
//!
//! Customer lists, sales items and the lookups the sales screens need.

use shared::{
    BrandDiscountRequest, CustomersRequest, Envelope, RequestEnvelope, SalesItemsRequest, Scope,
};

use super::client::ApiClient;
use crate::core::error::Result;

pub const CUSTOMERS: &str = "customers.php";
pub const SALES_ITEMS: &str = "salesitems.php";
pub const BRAND_DISCOUNT: &str = "customerbranddiscount.php";
pub const SALES_ACCOUNTS: &str = "salesaccounts.php";
pub const PRICE_TYPES: &str = "PriceType.php";
pub const NEW_SALE: &str = "newsales.php";

/// Customers assigned to `request.empid`. Payload key `customers`.
#[tracing::instrument(skip(client, request), fields(empid = %request.empid))]
pub async fn get_customers(client: &ApiClient, request: &CustomersRequest) -> Result<Envelope> {
    client.send(CUSTOMERS, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(skip(client, request), fields(column = %request.column))]
pub async fn get_sales_items(client: &ApiClient, request: &SalesItemsRequest) -> Result<Envelope> {
    client.send(SALES_ITEMS, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(
    skip(client, request),
    fields(customerid = %request.customerid, brandid = %request.brandid)
)]
pub async fn get_customer_brand_discount(
    client: &ApiClient,
    request: &BrandDiscountRequest,
) -> Result<Envelope> {
    client.send(BRAND_DISCOUNT, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(skip_all)]
pub async fn get_sales_accounts(client: &ApiClient, scope: &Scope) -> Result<Envelope> {
    client.send(SALES_ACCOUNTS, &RequestEnvelope::from(scope)).await
}

#[tracing::instrument(skip_all)]
pub async fn get_price_types(client: &ApiClient, scope: &Scope) -> Result<Envelope> {
    client.send(PRICE_TYPES, &RequestEnvelope::from(scope)).await
}

/// Submit a sale. The field set is caller-defined.
#[tracing::instrument(skip_all, fields(field_count = sale.len()))]
pub async fn create_sale(client: &ApiClient, sale: &RequestEnvelope) -> Result<Envelope> {
    client.send(NEW_SALE, sale).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;
    use crate::testing::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn scope() -> Scope {
        Scope {
            officecode: "WF01".to_string(),
            officeid: "1".to_string(),
            financialyearid: "2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_customers_payload_is_returned_untouched() {
        let transport = Arc::new(ScriptedTransport::new());
        let body = json!({"flag": true, "customers": [{"customerid": "77", "customer_name": "Anil Stores"}]});
        transport.push_json(CUSTOMERS, body.clone());
        let client = ApiClient::new("https://erp.test", transport.clone(), Arc::new(MemoryStore::new()));

        let request = CustomersRequest { scope: scope(), empid: "4".to_string() };
        let envelope = get_customers(&client, &request).await.unwrap();

        assert_eq!(envelope.as_value(), &body);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.field("empid"), Some("4"));
        assert_eq!(sent.field("financialyearid"), Some("2"));
    }

    #[tokio::test]
    async fn test_sales_items_defaults_to_full_list() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(SALES_ITEMS, json!({"flag": true, "items": []}));
        let client = ApiClient::new("https://erp.test", transport.clone(), Arc::new(MemoryStore::new()));

        get_sales_items(&client, &SalesItemsRequest::all(scope())).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.field("column"), Some("0"));
        assert_eq!(sent.field("barcode"), Some(""));
    }
}
