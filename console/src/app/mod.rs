//! # Application Layer
//!
//! Process-wide state and the pieces every screen shares.
//!
//! ```text
//! app/
//! ├── context.rs    - AppContext (owns config, storage, client, session), ScreenContext
//! ├── session.rs    - SessionStore state machine (login, logout, resolve)
//! ├── operation.rs  - AsyncOperation: data / loading / error around one call
//! └── screen.rs     - ListView: what a list screen shows for an operation state
//! ```
//!
//! ## Flow
//!
//! ```text
//! AppContext::start ──▶ SessionStore::resolve
//!        │
//!        ├─▶ ScreenContext (office, year, employee)
//!        │
//!        └─▶ AsyncOperation::execute ──▶ façade ──▶ ApiClient::send
//!                    │
//!                    └─ unauthorized? ──▶ SessionStore::logout
//! ```

pub mod context;
pub mod operation;
pub mod screen;
pub mod session;

pub use context::{AppContext, ScreenContext};
pub use operation::{AsyncOperation, OperationState};
pub use screen::ListView;
pub use session::{SessionState, SessionStore};
