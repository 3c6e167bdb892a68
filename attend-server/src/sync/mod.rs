//! Link-master synchronization
//!
//! Keeps `kbs_api_linkmaster` consistent with the employee directory. Two
//! entry points converge on the same relationship (one employee, at most
//! one link row, matched by natural key):
//!
//! - [`profile::sync_profile_to_link_master`] reconciles a single profile
//!   after an employee save, matching on `erp_username`.
//! - [`bulk::run_insert_pass`] / [`bulk::run_refresh_pass`] sweep the whole
//!   directory, matching on `linkno = empno`.
//!
//! The sync subsystem only ever inserts and updates link rows; it never
//! deletes, and it never writes the employee directory.

pub mod bulk;
pub mod profile;

pub use bulk::{BulkInsertReport, BulkRefreshReport, run_insert_pass, run_refresh_pass};
pub use profile::{ProfileSync, SkipReason, SyncAction, SyncOutcome, sync_profile_to_link_master};
