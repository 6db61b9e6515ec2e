//! # Authentication Endpoints
//!
//! Handles login and password changes.

use serde::de::DeserializeOwned;
use shared::utils::excerpt;
use shared::{ChangePasswordRequest, Envelope, LoginRequest, LoginResponse, RequestEnvelope};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result, MALFORMED_EXCERPT_CHARS};

pub const LOGIN: &str = "login.php";
pub const CHANGE_PASSWORD: &str = "changepassword.php";

/// Login with username, password and office code.
#[tracing::instrument(
    skip(client, request),
    fields(username = %request.username, officecode = %request.officecode)
)]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let envelope = client.send(LOGIN, &RequestEnvelope::from(request)).await?;
    decode(LOGIN, envelope)
}

/// Change the password of `request.username`.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<Envelope> {
    client
        .send(CHANGE_PASSWORD, &RequestEnvelope::from(request))
        .await
}

/// Decode a typed reply from an envelope that already passed interpretation.
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, envelope: Envelope) -> Result<T> {
    let value = envelope.into_value();
    serde_json::from_value(value.clone()).map_err(|e| {
        tracing::error!(endpoint = %endpoint, error = %e, "Reply did not match the expected shape");
        ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            excerpt: excerpt(&value.to_string(), MALFORMED_EXCERPT_CHARS).to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::services::storage::MemoryStore;
    use crate::testing::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<ScriptedTransport>) -> ApiClient {
        ApiClient::new("https://erp.test", transport, Arc::new(MemoryStore::new()))
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            username: "admin".to_string(),
            password: "1234".to_string(),
            officecode: "WF01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_sends_exactly_the_three_credentials() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(
            LOGIN,
            json!({"flag": true, "employee": {"empid": "4", "empname": "Admin"}}),
        );

        let resp = login(&client(transport.clone()), &credentials()).await.unwrap();
        assert!(resp.flag);
        assert_eq!(resp.credentials().unwrap()["empid"], "4");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.fields.len(), 3);
        assert_eq!(sent.field("password"), Some("1234"));
        assert!(sent.url.ends_with("/login.php"));
    }

    #[tokio::test]
    async fn test_login_rejection_passes_through_unchanged() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(LOGIN, json!({"flag": false, "msg": "Invalid credentials"}));

        let err = login(&client(transport), &credentials()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiLogic);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_reply_with_wrong_shape_is_malformed() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(LOGIN, json!({"flag": true, "employee": "not-an-object"}));

        let err = login(&client(transport), &credentials()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
