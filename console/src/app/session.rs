//! # Session Store
//!
//! Process-wide authenticated identity with an explicit lifecycle.
//!
//! ```text
//!                 resolve()
//!  Unresolved ───────────────┬──────────────▶ Anonymous ◀──────────┐
//!                            │                   │                 │
//!                            │            login()│                 │ logout()
//!                            │                   ▼                 │
//!                            │             Authenticating          │
//!                            │              │          │           │
//!                            ▼      success │          │ failure   │
//!                      Authenticated ◀──────┘          └──▶ Error ─┤
//!                            │                                     │
//!                            └─────────────────────────────────────┘
//! ```
//!
//! The store is the only writer of the persisted session record, and together
//! with [`ApiClient::set_token`] the only writer of the bearer token.
//!
//! Overlapping `login` calls are not serialized; whichever settles last
//! decides the final state.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, LoginResponse, Session};

use crate::core::error::{ApiError, Result};
use crate::core::service::KeyValueStore;
use crate::normalize::{first_text, Record};
use crate::services::api::{auth, ApiClient};
use crate::services::storage::SESSION_KEY;
use crate::utils::validate_login;

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_ERROR_FALLBACK: &str = "An error occurred during login";

/// Lifecycle state of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Durable storage not consulted yet.
    #[default]
    Unresolved,
    Anonymous,
    Authenticating,
    Authenticated(Session),
    /// Last login attempt failed. No session.
    Error(String),
}

pub struct SessionStore {
    client: Arc<ApiClient>,
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(client: Arc<ApiClient>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            client,
            storage,
            state: RwLock::new(SessionState::Unresolved),
        }
    }

    /// Load the persisted session.
    ///
    /// A record that does not parse is removed and treated as absent. Without
    /// a usable record any leftover bearer token is dropped too.
    pub fn resolve(&self) -> SessionState {
        let resolved = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    tracing::info!(userid = %session.user_id, "Restored persisted session");
                    SessionState::Authenticated(session)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupt session record");
                    self.forget_persisted();
                    SessionState::Anonymous
                }
            },
            Ok(None) => {
                self.forget_persisted();
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session record unreadable, starting anonymous");
                self.forget_persisted();
                SessionState::Anonymous
            }
        };

        *self.state.write() = resolved.clone();
        resolved
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn session(&self) -> Option<Session> {
        match &*self.state.read() {
            SessionState::Authenticated(session) => Some(session.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::Authenticated(_))
    }

    /// Message of the last failed login, until logout or the next attempt.
    pub fn error(&self) -> Option<String> {
        match &*self.state.read() {
            SessionState::Error(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// True while a login is in flight or storage has not been consulted.
    pub fn is_loading(&self) -> bool {
        matches!(
            *self.state.read(),
            SessionState::Unresolved | SessionState::Authenticating
        )
    }

    /// Authenticate and persist the resulting session.
    ///
    /// On failure the store moves to [`SessionState::Error`], any previously
    /// persisted record and token are dropped, and the error is returned.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str, officecode: &str) -> Result<Session> {
        *self.state.write() = SessionState::Authenticating;

        match self.authenticate(username, password, officecode).await {
            Ok(session) => {
                tracing::info!(userid = %session.user_id, "Login successful");
                *self.state.write() = SessionState::Authenticated(session.clone());
                Ok(session)
            }
            Err(e) => {
                let message = Some(e.to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| LOGIN_ERROR_FALLBACK.to_string());
                tracing::warn!(error = %message, "Login failed");
                self.forget_persisted();
                *self.state.write() = SessionState::Error(message);
                Err(e)
            }
        }
    }

    async fn authenticate(&self, username: &str, password: &str, officecode: &str) -> Result<Session> {
        validate_login(username, password, officecode)
            .into_result()
            .map_err(ApiError::Validation)?;

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            officecode: officecode.to_string(),
        };
        let response = auth::login(&self.client, &request).await?;

        let session = session_from_login(&response, officecode).ok_or_else(|| {
            ApiError::ApiLogic {
                endpoint: auth::LOGIN.to_string(),
                message: response.message().unwrap_or(LOGIN_FAILED).to_string(),
                envelope: serde_json::to_value(&response).unwrap_or_default(),
            }
        })?;

        let record = serde_json::to_string(&session)
            .map_err(|e| ApiError::Storage(format!("Failed to encode session: {}", e)))?;
        self.client.set_token(session.token.as_deref())?;
        self.storage.set(SESSION_KEY, &record)?;

        Ok(session)
    }

    /// Drop the session: memory, persisted record and bearer token.
    ///
    /// Memory is cleared even when storage fails; the first storage error is
    /// returned.
    pub fn logout(&self) -> Result<()> {
        *self.state.write() = SessionState::Anonymous;

        let record = self.storage.remove(SESSION_KEY);
        let token = self.client.set_token(None);
        tracing::info!("Logged out");

        record.and(token)
    }

    /// Best-effort removal of the record and token; failures are only logged.
    fn forget_persisted(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "Failed to remove session record");
        }
        if let Err(e) = self.client.set_token(None) {
            tracing::warn!(error = %e, "Failed to clear bearer token");
        }
    }

    /// Leave [`SessionState::Error`] without another attempt.
    pub fn clear_error(&self) {
        let mut state = self.state.write();
        if matches!(*state, SessionState::Error(_)) {
            *state = SessionState::Anonymous;
        }
    }
}

/// Build a session from a successful login reply.
///
/// `None` when the reply is not a success or carries no employee record. The
/// office code typed by the user wins over the one in the reply.
pub fn session_from_login(response: &LoginResponse, officecode: &str) -> Option<Session> {
    if !response.flag {
        return None;
    }
    let employee: &Record = response.credentials()?;
    let field = |aliases: &[&str]| first_text(employee, aliases).unwrap_or_default();

    let office_code = Some(officecode.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| field(&["officecode"]));

    Some(Session {
        user_id: field(&["empid", "employeeid"]),
        username: field(&["empname"]),
        office_id: field(&["officeid"]),
        office_code,
        display_name: field(&["employee_name", "empname"]),
        office_name: field(&["officename"]),
        location: field(&["location"]),
        financial_year_id: first_text(employee, &["financialyearid"]),
        token: first_text(employee, &["token"]),
        session_id: first_text(employee, &["sessionid"]),
    })
}
