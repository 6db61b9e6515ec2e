//! # Logging
//!
//! Structured diagnostics for the console.
//!
//! - **File-based logging**: `erp-console.log.<date>` under the log directory (daily rotation)
//! - **Optional stderr mirror** for interactive troubleshooting
//! - **Panic logging**: panics are recorded before the default handler runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use erp_console::debug::{self, LogConfig};
//!
//! debug::init_logger(&LogConfig::from_env("logs"));
//!
//! tracing::info!(endpoint = "customers.php", duration_ms = 234, "Request succeeded");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `erp_console=info,warn`)
//! - `ERP_CONSOLE_LOG_DIR`: Log directory (default `<data dir>/logs`)
//! - `ERP_CONSOLE_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
