//! # API Client
//!
//! The Transport Client: the single point of outbound communication with the
//! ERP backend. It owns the cached bearer token and turns the backend's
//! heterogeneous replies into either an [`Envelope`] or an [`ApiError`].
//!
//! ## Reply interpretation
//!
//! ```text
//! status not 2xx            -> ApiError::Transport
//! body starts with SQL      -> ApiError::BackendMisconfiguration (body logged only)
//! body is not JSON          -> ApiError::MalformedResponse (50-char excerpt)
//! {"flag": false, ...}      -> ApiError::ApiLogic (msg | error | "API request failed")
//! anything else             -> Ok(Envelope), unchanged
//! ```
//!
//! The body is always read as text first; the backend serves JSON with a
//! generic content type and sometimes serves something else entirely.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde_json::Value;
use shared::utils::excerpt;
use shared::{Envelope, RequestEnvelope};

use crate::core::error::{ApiError, Result, MALFORMED_EXCERPT_CHARS};
use crate::core::service::{HttpMethod, HttpReply, HttpRequest, HttpTransport, KeyValueStore};
use crate::services::storage::TOKEN_KEY;

/// Default backend origin.
pub const DEFAULT_BASE_URL: &str = "https://ezyerp.ezyplus.in";

/// Message used when a `flag: false` envelope carries neither `msg` nor `error`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

const SQL_KEYWORDS: [&str; 4] = ["SELECT", "INSERT", "UPDATE", "DELETE"];

/// HTTP client for the ERP backend.
///
/// Cheap to share behind an `Arc`; the token cache is the only mutable state.
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStore>,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client and load any previously stored bearer token.
    ///
    /// A token that cannot be read is treated as absent.
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Stored token unreadable, starting without one");
                None
            }
        };

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            storage,
            token: RwLock::new(token),
        }
    }

    /// Base origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the cached bearer token, mirroring it to durable storage.
    ///
    /// Storage is written first; if that fails the cache is left untouched so
    /// the two never disagree.
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => self.storage.set(TOKEN_KEY, token)?,
            None => self.storage.remove(TOKEN_KEY)?,
        }
        *self.token.write() = token.map(str::to_string);
        tracing::debug!(has_token = token.is_some(), "Bearer token updated");
        Ok(())
    }

    /// Currently cached bearer token.
    pub fn get_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// POST `envelope` to `endpoint`.
    pub async fn send(&self, endpoint: &str, envelope: &RequestEnvelope) -> Result<Envelope> {
        self.send_with(endpoint, HttpMethod::Post, envelope).await
    }

    /// Send `envelope` to `endpoint` with an explicit method.
    #[tracing::instrument(skip(self, envelope), fields(method = method.as_str()))]
    pub async fn send_with(
        &self,
        endpoint: &str,
        method: HttpMethod,
        envelope: &RequestEnvelope,
    ) -> Result<Envelope> {
        let request = self.build_request(endpoint, method, envelope);
        let start = Instant::now();

        tracing::debug!(
            url = %request.url,
            field_count = request.fields.len(),
            "Sending request"
        );

        let reply = self.transport.execute(request).await.map_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e, "Request failed before a reply");
            e
        })?;

        let status = reply.status;
        let result = interpret_reply(endpoint, reply);
        let duration_ms = start.elapsed().as_millis();

        match &result {
            Ok(envelope) => tracing::info!(
                endpoint = %endpoint,
                status,
                duration_ms,
                response = %envelope.as_value(),
                "Request succeeded"
            ),
            Err(e) => tracing::warn!(
                endpoint = %endpoint,
                status,
                duration_ms,
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    /// Resolve `endpoint` and `envelope` into a wire request.
    ///
    /// Only fields with a value are included.
    pub(crate) fn build_request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        envelope: &RequestEnvelope,
    ) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = self.get_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        HttpRequest {
            endpoint: endpoint.to_string(),
            method,
            url: format!("{}/{}", self.base_url, endpoint.trim_start_matches('/')),
            headers,
            fields: envelope
                .present()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Whether `body` is a leaked SQL statement rather than a reply.
pub fn leaks_sql(body: &str) -> bool {
    let trimmed = body.trim_start();
    SQL_KEYWORDS.iter().any(|kw| {
        trimmed
            .get(..kw.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(kw))
    })
}

/// Turn a raw reply into an envelope or a classified error.
pub fn interpret_reply(endpoint: &str, reply: HttpReply) -> Result<Envelope> {
    if !reply.is_success() {
        return Err(ApiError::Transport {
            endpoint: endpoint.to_string(),
            status: reply.status,
        });
    }

    let body = reply.body;

    if leaks_sql(&body) {
        tracing::error!(
            endpoint = %endpoint,
            body = %excerpt(body.trim_start(), 100),
            "Backend returned SQL instead of JSON"
        );
        return Err(ApiError::BackendMisconfiguration {
            endpoint: endpoint.to_string(),
        });
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            endpoint = %endpoint,
            error = %e,
            body = %excerpt(&body, 200),
            "Failed to parse JSON response"
        );
        ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            excerpt: excerpt(&body, MALFORMED_EXCERPT_CHARS).to_string(),
        }
    })?;

    let envelope = Envelope::new(value);
    if envelope.flag() == Some(false) {
        let message = envelope
            .message()
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        return Err(ApiError::ApiLogic {
            endpoint: endpoint.to_string(),
            message,
            envelope: envelope.into_value(),
        });
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::services::storage::MemoryStore;
    use crate::testing::ScriptedTransport;
    use serde_json::json;

    fn ok(body: &str) -> HttpReply {
        HttpReply { status: 200, body: body.to_string() }
    }

    fn client_with(
        transport: Arc<ScriptedTransport>,
        storage: Arc<MemoryStore>,
    ) -> ApiClient {
        ApiClient::new("https://erp.test/", transport, storage)
    }

    #[test]
    fn test_non_success_status_is_transport_error() {
        let err = interpret_reply("customers.php", HttpReply { status: 503, body: "{}".into() })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_sql_bodies_are_misconfiguration_regardless_of_case_and_whitespace() {
        for body in [
            "SELECT * FROM customers WHERE officeid=1",
            "   \n\tselect id from x",
            "Insert into receipts values (1)",
            "  UPDATE receipts SET amount = 5",
        ] {
            let err = interpret_reply("collections.php", ok(body)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BackendMisconfiguration, "body: {body}");
            assert!(!err.to_string().contains("receipts"));
        }
    }

    #[test]
    fn test_sql_check_runs_before_json_parse() {
        // Valid JSON never starts with a keyword, but a leaked statement can be
        // followed by JSON-looking text; the keyword wins.
        let err = interpret_reply("stocks.php", ok("SELECT {\"flag\":true}")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BackendMisconfiguration);
    }

    #[test]
    fn test_invalid_json_is_malformed_with_prefix_excerpt() {
        let body = "<html><body>Fatal error: Uncaught mysqli_sql_exception in /var/www/customers.php</body></html>";
        let err = interpret_reply("customers.php", ok(body)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let message = err.to_string();
        assert!(message.contains(&body[..MALFORMED_EXCERPT_CHARS]));
        assert!(!message.contains("/var/www/customers.php"));
    }

    #[test]
    fn test_flag_false_uses_msg_then_error_then_default() {
        let cases = [
            (json!({"flag": false, "msg": "No data found", "error": "x"}), "No data found"),
            (json!({"flag": false, "error": "Invalid office"}), "Invalid office"),
            (json!({"flag": false}), DEFAULT_FAILURE_MESSAGE),
        ];
        for (body, expected) in cases {
            let err = interpret_reply("collections.php", ok(&body.to_string())).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ApiLogic);
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.envelope(), Some(&body));
        }
    }

    #[test]
    fn test_flag_true_or_absent_returns_object_unchanged() {
        for body in [
            json!({"flag": true, "customers": [{"customerid": "1"}]}),
            json!({"stocks": [{"productname": "Rice", "stockqty": "12"}]}),
        ] {
            let envelope = interpret_reply("x.php", ok(&body.to_string())).unwrap();
            assert_eq!(envelope.as_value(), &body);
        }
    }

    #[test]
    fn test_token_is_loaded_from_storage_on_construction() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(TOKEN_KEY, "persisted").unwrap();
        let client = client_with(Arc::new(ScriptedTransport::new()), storage);
        assert_eq!(client.get_token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_set_token_mirrors_storage_and_clearing_twice_is_idempotent() {
        let storage = Arc::new(MemoryStore::new());
        let client = client_with(Arc::new(ScriptedTransport::new()), storage.clone());

        client.set_token(Some("tok-123")).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-123"));
        assert_eq!(client.get_token().as_deref(), Some("tok-123"));

        client.set_token(None).unwrap();
        let writes_after_first_clear = storage.write_count();
        client.set_token(None).unwrap();

        assert!(!storage.contains(TOKEN_KEY));
        assert_eq!(storage.write_count(), writes_after_first_clear);
        assert_eq!(client.get_token(), None);
    }

    #[tokio::test]
    async fn test_send_posts_present_fields_with_headers() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json("creditagingreport.php", json!({"flag": true, "creditage": []}));
        let client = client_with(transport.clone(), Arc::new(MemoryStore::new()));
        client.set_token(Some("tok-123")).unwrap();

        let envelope = RequestEnvelope::new()
            .field("officecode", "WF01")
            .field("customerid", "77")
            .optional("noofdays", None::<String>)
            .optional("condition", Some(""));
        client.send("creditagingreport.php", &envelope).await.unwrap();

        let sent = transport.last_request().expect("request should be captured");
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://erp.test/creditagingreport.php");
        assert_eq!(sent.header("accept"), Some("application/json"));
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-123"));
        assert_eq!(sent.field("officecode"), Some("WF01"));
        assert_eq!(sent.field("condition"), Some(""));
        assert_eq!(sent.field("noofdays"), None);
        assert_eq!(sent.fields.len(), 3);
    }

    #[tokio::test]
    async fn test_send_without_token_has_no_authorization_header() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json("areas.php", json!({"flag": true, "areas": []}));
        let client = client_with(transport.clone(), Arc::new(MemoryStore::new()));

        client
            .send_with("areas.php", HttpMethod::Get, &RequestEnvelope::new())
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_network_error("login.php", "connection refused");
        let client = client_with(transport, Arc::new(MemoryStore::new()));

        let err = client.send("login.php", &RequestEnvelope::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
