//! Database Models

// Serde helpers
pub mod serde_helpers;

// Masters
pub mod branch;
pub mod company;
pub mod employee;
pub mod role;

// Integration
pub mod link_master;

// Attendance
pub mod punch;

// System
pub mod audit;

// Re-exports
pub use audit::AuditEntry;
pub use branch::{Branch, BranchCreate, BranchUpdate};
pub use company::{Company, CompanyCreate, CompanyUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use link_master::{LinkMaster, LinkMasterCreate, LinkMasterUpdate};
pub use punch::{Punch, PunchCreate};
pub use role::{Role, RoleCreate, RoleUpdate};
