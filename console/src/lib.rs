//! # ERP Console - Library Root
//!
//! Client for an ERP backend (customers, sales, collections, master data and
//! reports) exposed as a set of PHP endpoints. The binary (`main.rs`) is a
//! command-line front end; everything it does lives here so it can be tested
//! against a scripted transport.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  cli           - clap commands, plain-text tables      │
//! ├────────────────────────────────────────────────────────┤
//! │  app           - AppContext, SessionStore,             │
//! │                  AsyncOperation, ListView              │
//! ├────────────────────────────────────────────────────────┤
//! │  normalize     - alias resolution into typed rows      │
//! ├────────────────────────────────────────────────────────┤
//! │  services::api - ApiClient + one module per domain     │
//! │  services::storage - durable session/token records     │
//! └────────────────────────────────────────────────────────┘
//!          │ multipart POST / GET query
//!          ▼
//! ┌─────────────────────────┐
//! │  ERP backend (*.php)    │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: process-wide state and the request lifecycle hook
//! - **[`cli`]**: command definitions and dispatch
//! - **[`config`]**: environment-driven [`config::ConsoleConfig`]
//! - **[`core`]**: [`ApiError`] and the transport/storage traits
//! - **[`debug`]**: file logging setup
//! - **[`normalize`]**: response normalizers
//! - **[`services`]**: Transport Client, domain façade, storage backends
//! - **[`utils`]**: form validation
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result<T>`]. Backend failures are
//! classified once by the Transport Client; see [`core::error`].
//!
//! ## Shared Crate
//!
//! - `shared` - wire DTOs: request envelopes, the reply envelope, `Session`

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod debug;
pub mod normalize;
pub mod services;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use app::{AppContext, AsyncOperation, SessionState, SessionStore};
pub use core::{ApiError, ErrorKind, Result};
pub use services::api::ApiClient;
