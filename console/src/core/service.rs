//! # Service Traits
//!
//! Seams for dependency injection: the wire ([`HttpTransport`]) and durable
//! client storage ([`KeyValueStore`]). Production code uses
//! [`crate::services::api::ReqwestTransport`] and
//! [`crate::services::storage::FileStore`]; tests swap in fakes.

use async_trait::async_trait;

use super::error::Result;

/// HTTP verb used for a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Read-style call; fields travel as query parameters.
    Get,
    /// Write-style call (the default); fields travel as a multipart body.
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// One outgoing request, already resolved to a URL and text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Endpoint name, kept for logging and error context.
    pub endpoint: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub fields: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body text of a reply. The body is never pre-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP exchanges.
///
/// Implementations return `Err` only when no status was received
/// ([`crate::core::error::ApiError::Network`]); status interpretation belongs
/// to the Transport Client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply>;
}

/// Durable string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
