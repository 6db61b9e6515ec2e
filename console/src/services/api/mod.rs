//! # Backend API Client Module
//!
//! The Transport Client and the Domain Service Façade for the ERP backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient: token cache, send, reply interpretation
//! ├── transport.rs    - ReqwestTransport (multipart POST, query GET)
//! ├── auth.rs         - login, change password
//! ├── sales.rs        - customers, sales items, discounts, accounts, price types
//! ├── collections.rs  - list, create, delete collections
//! ├── master.rs       - financial years, areas, employees, office lookups
//! └── reports.rs      - statement, credit aging, stocks, dashboard
//! ```
//!
//! Façade functions fix the endpoint name and the parameter set, then hand
//! over to [`ApiClient::send`]. Errors pass through unchanged.

pub mod auth;
pub mod client;
pub mod collections;
pub mod master;
pub mod reports;
pub mod sales;
pub mod transport;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use transport::ReqwestTransport;
