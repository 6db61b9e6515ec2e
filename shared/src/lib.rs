//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the console and the ERP backend.
//! The backend is a set of PHP endpoints that take form fields and answer with a
//! loosely typed JSON envelope, so the types here are deliberately lenient on the
//! way in and strict on the way out.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, change-password and the persisted [`Session`]
//!   - **[`dto::envelope`]**: [`RequestEnvelope`] (outgoing form fields) and
//!     [`Envelope`] (the `{flag, msg, error, <payload>}` reply)
//!   - **[`dto::requests`]**: Typed parameter sets for each endpoint
//! - **[`utils`]**: Lenient string/number conversion and text excerpts
//!
//! ## Wire Format
//!
//! Every request value travels as text, including numeric ids and amounts.
//! Replies may carry the same logical value as a string or a number; use
//! [`utils::value_as_text`] and [`utils::value_as_f64`] rather than matching on
//! the JSON type.
//!
//! ```rust
//! use shared::{LoginRequest, RequestEnvelope};
//!
//! let request = LoginRequest {
//!     username: "admin".to_string(),
//!     password: "1234".to_string(),
//!     officecode: "WF01".to_string(),
//! };
//! let envelope = RequestEnvelope::from(&request);
//! assert_eq!(envelope.get("officecode"), Some("WF01"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
