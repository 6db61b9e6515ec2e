//! # Console Configuration
//!
//! Loaded once from environment variables (and `.env`, via `dotenvy`, in the
//! binary) and owned by [`crate::app::AppContext`]. There is no global config.
//!
//! | Variable                 | Default                          |
//! |--------------------------|----------------------------------|
//! | `ERP_API_BASE_URL`       | `https://ezyerp.ezyplus.in`      |
//! | `ERP_CONSOLE_DATA_DIR`   | `<platform data dir>/erp-console`|
//! | `ERP_CONSOLE_LOG_DIR`    | `<data dir>/logs`                |
//! | `ERP_FINANCIAL_YEAR_ID`  | `2`                              |

use std::path::PathBuf;

use lib_utils::{get_env_opt, get_env_or};

use crate::core::error::{ApiError, Result};
use crate::services::api::DEFAULT_BASE_URL;

/// Financial year used when the session does not carry one.
pub const DEFAULT_FINANCIAL_YEAR_ID: &str = "2";

const APP_DIR: &str = "erp-console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend origin, without trailing slash.
    pub base_url: String,
    /// Directory of the durable session and token records.
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub financial_year_id: String,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = get_env_or("ERP_API_BASE_URL", DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let data_dir = match get_env_opt("ERP_CONSOLE_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let log_dir = get_env_opt("ERP_CONSOLE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));

        let financial_year_id = get_env_or("ERP_FINANCIAL_YEAR_ID", DEFAULT_FINANCIAL_YEAR_ID);

        let config = Self {
            base_url,
            data_dir,
            log_dir,
            financial_year_id,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ApiError::Config(format!(
                "ERP_API_BASE_URL must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        if self.financial_year_id.trim().is_empty() {
            return Err(ApiError::Config(
                "ERP_FINANCIAL_YEAR_ID cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| {
            ApiError::Config(
                "No data directory available; set ERP_CONSOLE_DATA_DIR".to_string(),
            )
        })
}
