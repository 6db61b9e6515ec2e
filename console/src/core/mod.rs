//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the console.
//!
//! - **[`error`]**: [`ApiError`], [`ErrorKind`] and the crate `Result<T>`
//! - **[`service`]**: [`HttpTransport`] and [`KeyValueStore`] seams
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use erp_console::core::service::{HttpTransport, KeyValueStore};
//! use erp_console::services::api::ReqwestTransport;
//! use erp_console::services::storage::MemoryStore;
//!
//! let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new());
//! let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ErrorKind, Result};
pub use service::{HttpMethod, HttpReply, HttpRequest, HttpTransport, KeyValueStore};
