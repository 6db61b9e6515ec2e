//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::{get_env_flag, get_env_or};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "erp_console=info,warn";

/// Rolling log file prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "erp-console.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the daily log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g., "erp_console=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            stderr: get_env_flag("ERP_CONSOLE_LOG_STDERR"),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }

    pub fn log_file_prefix(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }
}
