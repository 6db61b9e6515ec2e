//! # Reqwest Transport
//!
//! Production [`HttpTransport`]. POST fields travel as `multipart/form-data`
//! so the same path can later carry file fields; GET fields become query
//! parameters. The body is handed back as raw text.

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;

use crate::core::error::{ApiError, Result};
use crate::core::service::{HttpMethod, HttpReply, HttpRequest, HttpTransport};

/// [`HttpTransport`] over a pooled `reqwest` client.
///
/// No request timeout is configured; a hung backend keeps the call pending.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Wrap an existing client (custom TLS roots, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply> {
        let HttpRequest {
            endpoint,
            method,
            url,
            headers,
            fields,
        } = request;

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url).query(&fields),
            HttpMethod::Post => {
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value));
                self.client.post(&url).multipart(form)
            }
        };

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let network = |e: reqwest::Error| ApiError::Network {
            endpoint: endpoint.clone(),
            message: e.to_string(),
        };

        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;

        Ok(HttpReply { status, body })
    }
}
