//! # Environment Variables
//!
//! Console settings come from the process environment (and `.env`). A blank
//! value counts as unset so a `.env` line like `ERP_API_BASE_URL=` falls back
//! to the default.

use std::env;

/// Value of `name`, trimmed; `None` when unset or blank.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Value of `name`, or `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// On/off switch: `1`, `true`, `yes` and `on` (any case) are on.
pub fn get_env_flag(name: &'static str) -> bool {
    get_env_opt(name).is_some_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
