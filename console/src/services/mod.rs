//! # Services Module
//!
//! External integrations of the console.
//!
//! ```text
//! services/
//! ├── api/        - Transport Client and Domain Service Façade
//! └── storage.rs  - Durable client storage (session record, bearer token)
//! ```
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │              erp-console                   │
//! │                                            │
//! │  ┌──────────────┐      ┌───────────────┐   │
//! │  │  ApiClient   │─────▶│  FileStore    │   │
//! │  │  (api/)      │token │  (storage.rs) │   │
//! │  └──────┬───────┘      └───────────────┘   │
//! └─────────┼──────────────────────────────────┘
//!           │ HTTPS, multipart/form-data
//!           ▼
//! ┌────────────────────────────┐
//! │  ERP backend (*.php)       │
//! │  { flag, msg?, payload }   │
//! └────────────────────────────┘
//! ```

pub mod api;
pub mod storage;
