//! # Utilities Library
//!
//! Shared utility functions for environment variables, backend date ranges, and
//! input presence checks.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env_flag, get_env_opt, get_env_or};
pub use time::{format_ymd, month_to_date, parse_ymd, today_ymd};
pub use validation::{validate_not_empty, validate_positive_amount};
