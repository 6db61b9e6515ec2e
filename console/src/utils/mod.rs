//! # Utility Functions
//!
//! Shared utility functions used across the console.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form checks run before a request is made (login,
//!   collection entry, date ranges)
//!
//! ## Related Modules
//!
//! - [`lib_utils`]: Environment, date and presence helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;

pub use validation::{validate_collection, validate_date_range, validate_login, ValidationResult};
