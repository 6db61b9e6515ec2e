//! # Collection Endpoints
//!
//! Listing, recording and deleting customer collections (receipts).

use shared::{
    CollectionsRequest, DeleteCollectionRequest, Envelope, NewCollectionRequest, RequestEnvelope,
};

use super::client::ApiClient;
use crate::core::error::Result;

pub const COLLECTIONS: &str = "collections.php";
pub const NEW_COLLECTION: &str = "newcollection.php";
pub const DELETE_COLLECTION: &str = "deletecollection.php";

/// Collections recorded by `request.empid` between `sdate` and `edate`.
/// Payload key `collections`; an empty range comes back as `flag: false`.
#[tracing::instrument(
    skip(client, request),
    fields(empid = %request.empid, sdate = %request.sdate, edate = %request.edate)
)]
pub async fn get_collections(
    client: &ApiClient,
    request: &CollectionsRequest,
) -> Result<Envelope> {
    client.send(COLLECTIONS, &RequestEnvelope::from(request)).await
}

#[tracing::instrument(
    skip(client, request),
    fields(customerid = %request.customerid, payment = %request.payment)
)]
pub async fn create_collection(
    client: &ApiClient,
    request: &NewCollectionRequest,
) -> Result<Envelope> {
    client
        .send(NEW_COLLECTION, &RequestEnvelope::from(request))
        .await
}

#[tracing::instrument(skip(client, request), fields(receiptid = %request.receiptid))]
pub async fn delete_collection(
    client: &ApiClient,
    request: &DeleteCollectionRequest,
) -> Result<Envelope> {
    client
        .send(DELETE_COLLECTION, &RequestEnvelope::from(request))
        .await
}
