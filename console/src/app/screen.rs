//! # List Screens
//!
//! Maps an [`OperationState`] to what a list screen shows. Screens never look
//! at error types themselves; this is the one place that does.

use super::operation::OperationState;
use crate::core::error::{message_indicates_unauthorized, ErrorKind};

/// Shown when a successful reply holds no rows.
pub const NO_DATA: &str = "No data found";

#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// Request in flight, or not started yet.
    Loading,
    /// Nothing to show. Carries the backend's own wording when it gave one.
    Empty(String),
    /// The request failed; the rest of the console keeps working.
    Failed { message: String, kind: ErrorKind },
    Ready(Vec<T>),
}

impl<T> ListView<T> {
    /// Derive the view from a hook state, normalizing the payload with `rows`.
    ///
    /// A `flag: false` reply ("No data found") is an empty list, not a
    /// failure, unless it reports a rejected session.
    pub fn from_state<R>(state: &OperationState<R>, rows: impl FnOnce(&R) -> Vec<T>) -> Self {
        if state.loading {
            return ListView::Loading;
        }

        if let Some(message) = &state.error {
            let kind = state.error_kind.unwrap_or(ErrorKind::Transport);
            return if kind == ErrorKind::ApiLogic && !message_indicates_unauthorized(message) {
                ListView::Empty(message.clone())
            } else {
                ListView::Failed {
                    message: message.clone(),
                    kind,
                }
            };
        }

        match &state.data {
            Some(data) => {
                let rows = rows(data);
                if rows.is_empty() {
                    ListView::Empty(NO_DATA.to_string())
                } else {
                    ListView::Ready(rows)
                }
            }
            None => ListView::Loading,
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            ListView::Ready(rows) => rows,
            _ => &[],
        }
    }
}
