//! # hydroview-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DeviceApi` port** that the HTTP adapter implements
//! - Hold the explicit **dashboard model** (reducer-style application state,
//!   one mutation method per event: poll tick, config application, pump mode
//!   change)
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the notification queue)
//! - Orchestrate synchronization and dispatch:
//!   - `SyncService` — one-shot concurrent initialization fetch, then the
//!     silent steady-state status poll
//!   - `UpdateService` — per-domain form dispatch; every invocation yields
//!     exactly one notification
//!
//! ## Dependency rule
//! Depends on `hydroview-domain` only (plus `tokio` macros for joining the
//! concurrent initialization pair). Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.
//!
//! ## Concurrency model
//! The consumer is a single-threaded browser event loop, so port futures are
//! deliberately not `Send`. No operation blocks, nothing is cancelled once
//! issued, and overlapping status polls resolve last-write-wins by arrival
//! order.

pub mod model;
pub mod notifier;
pub mod ports;
pub mod services;
