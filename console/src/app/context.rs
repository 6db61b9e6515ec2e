//! # Application Context
//!
//! The explicit owner of every process-wide service: configuration, durable
//! storage, the Transport Client and the Session Store. Built once at start
//! and passed to whatever needs it.

use std::sync::Arc;

use futures::future::BoxFuture;
use shared::{Office, Scope, Session};

use super::operation::AsyncOperation;
use super::session::{SessionState, SessionStore};
use crate::config::ConsoleConfig;
use crate::core::error::{ApiError, Result};
use crate::core::service::{HttpTransport, KeyValueStore};
use crate::services::api::{ApiClient, ReqwestTransport};
use crate::services::storage::FileStore;

pub const NOT_LOGGED_IN: &str = "Not logged in. Run `erp-console login` first.";

pub struct AppContext {
    config: ConsoleConfig,
    storage: Arc<dyn KeyValueStore>,
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AppContext {
    /// Wire the services together. The session is left unresolved.
    pub fn new(
        config: ConsoleConfig,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let client = Arc::new(ApiClient::new(
            config.base_url.clone(),
            transport,
            storage.clone(),
        ));
        let session = Arc::new(SessionStore::new(client.clone(), storage.clone()));

        Self {
            config,
            storage,
            client,
            session,
        }
    }

    /// Production wiring: file storage under the data directory, reqwest
    /// transport, persisted session resolved.
    pub fn start(config: ConsoleConfig) -> Result<Self> {
        let storage = Arc::new(FileStore::new(&config.data_dir)?);
        let context = Self::new(config, Arc::new(ReqwestTransport::new()), storage);

        let state = context.session.resolve();
        tracing::info!(
            base_url = %context.config.base_url,
            authenticated = matches!(state, SessionState::Authenticated(_)),
            "Application context started"
        );
        Ok(context)
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Scope of the signed-in user, or a validation error when anonymous.
    pub fn screen(&self) -> Result<ScreenContext> {
        self.session
            .session()
            .map(|session| ScreenContext::from_session(&session, &self.config.financial_year_id))
            .ok_or_else(|| ApiError::Validation(NOT_LOGGED_IN.to_string()))
    }

    /// Bind a façade call to a new [`AsyncOperation`].
    pub fn operation<T, F>(&self, call: F) -> AsyncOperation<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(Arc<ApiClient>) -> BoxFuture<'static, Result<T>> + Send + Sync + 'static,
    {
        let client = self.client.clone();
        AsyncOperation::new(self.session.clone(), move || call(client.clone()))
    }
}

/// Identity and scope a screen needs to build its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    pub user_id: String,
    pub office_id: String,
    pub office_code: String,
    pub financial_year_id: String,
    pub display_name: String,
    pub office_name: String,
}

impl ScreenContext {
    /// The session's financial year wins over `default_financial_year`.
    pub fn from_session(session: &Session, default_financial_year: &str) -> Self {
        Self {
            user_id: session.user_id.clone(),
            office_id: session.office_id.clone(),
            office_code: session.office_code.clone(),
            financial_year_id: session
                .financial_year_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| default_financial_year.to_string()),
            display_name: session.display_name.clone(),
            office_name: session.office_name.clone(),
        }
    }

    pub fn scope(&self) -> Scope {
        Scope {
            officecode: self.office_code.clone(),
            officeid: self.office_id.clone(),
            financialyearid: self.financial_year_id.clone(),
        }
    }

    pub fn office(&self) -> Office {
        self.scope().office()
    }
}
