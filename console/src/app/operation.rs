//! # Async Operation Hook
//!
//! One-shot request/response tracker shared by every screen. It is bound to a
//! zero-argument operation (a façade call with its parameters captured) and
//! records `data`, `loading` and `error` around each invocation.
//!
//! Invocations are independent: nothing is queued or cancelled, so when two
//! overlap the one that settles last decides the visible state.
//!
//! An error that means the session is no longer accepted logs the user out as
//! a side effect of [`AsyncOperation::execute`].

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::RwLock;

use super::session::SessionStore;
use crate::core::error::{ErrorKind, Result};

pub const GENERIC_ERROR: &str = "An error occurred";

type Operation<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;
type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Snapshot of a hook. `data` and `error` are never both set.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            error_kind: None,
        }
    }
}

pub struct AsyncOperation<T> {
    operation: Operation<T>,
    session: Arc<SessionStore>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
    state: RwLock<OperationState<T>>,
}

impl<T> AsyncOperation<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F>(session: Arc<SessionStore>, operation: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<T>> + Send + Sync + 'static,
    {
        Self {
            operation: Box::new(operation),
            session,
            on_success: None,
            on_error: None,
            state: RwLock::new(OperationState::default()),
        }
    }

    pub fn on_success(mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Run the bound operation once and record how it settled.
    pub async fn execute(&self) {
        *self.state.write() = OperationState {
            loading: true,
            ..OperationState::default()
        };

        match (self.operation)().await {
            Ok(data) => {
                *self.state.write() = OperationState {
                    data: Some(data.clone()),
                    ..OperationState::default()
                };
                if let Some(callback) = &self.on_success {
                    callback(&data);
                }
            }
            Err(e) => {
                let message = Some(e.to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR.to_string());

                if e.is_unauthorized() {
                    tracing::warn!(error = %message, "Authentication rejected, logging out");
                    if let Err(e) = self.session.logout() {
                        tracing::error!(error = %e, "Forced logout could not clear storage");
                    }
                }

                *self.state.write() = OperationState {
                    error: Some(message.clone()),
                    error_kind: Some(e.kind()),
                    ..OperationState::default()
                };
                if let Some(callback) = &self.on_error {
                    callback(&message);
                }
            }
        }
    }

    /// Back to the initial state without running anything.
    pub fn reset(&self) {
        *self.state.write() = OperationState::default();
    }

    pub fn state(&self) -> OperationState<T> {
        self.state.read().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }
}
