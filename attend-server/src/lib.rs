//! Attend Server - HR/attendance administration backend
//!
//! Master records (company, branch, role, employee), attendance punch
//! capture, and the synchronization bridge that keeps the external
//! `kbs_api_linkmaster` table consistent with the employee directory.
//!
//! # Module structure
//!
//! ```text
//! attend-server/src/
//! ├── core/          # Config, ServerState, Server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, models, repositories, schema probe
//! ├── sync/          # profile and bulk link-master reconcilers
//! └── utils/         # AppError, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod sync;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use sync::{ProfileSync, SyncOutcome};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
