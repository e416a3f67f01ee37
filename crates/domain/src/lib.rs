//! # hydroview-domain
//!
//! Pure domain model for the hydroview dashboard controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, the time-of-day codec
//! - Define **DeviceStatus** (read-only snapshot replaced wholesale every poll)
//! - Define **DeviceConfig** (editable device configuration, fetched on demand)
//! - Define **Commands** (outbound POST payloads, parsed and validated from
//!   operator form input at the boundary)
//! - Define **Notifications** (transient operator feedback)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod config;
pub mod error;
pub mod notification;
pub mod status;
pub mod time;
