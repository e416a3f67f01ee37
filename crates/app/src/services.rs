//! Application services — synchronization and update dispatch use-cases.

pub mod sync_service;
pub mod update_service;

pub use sync_service::{InitialSnapshot, POLL_INTERVAL_MS, SyncService};
pub use update_service::UpdateService;
