//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the console and the ERP backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, change-password and session record DTOs
//! - [`envelope`] - Outgoing form envelope and incoming reply envelope
//! - [`requests`] - Parameter sets for the sales, collection, master and report endpoints
//!
//! ## Example Communication
//!
//! ```text
//! POST /login.php
//! Content-Type: multipart/form-data; boundary=...
//!
//! username=admin, password=1234, officecode=WF01
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: text/html
//!
//! {
//!   "flag": true,
//!   "msg": "Login successful",
//!   "employee": { "empid": "4", "empname": "Admin", "officeid": "1", "token": "tok-123" }
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod requests;

pub use auth::*;
pub use envelope::*;
pub use requests::*;
