//! # domo-domain
//!
//! Pure domain model for the domo home controller.
//!
//! ## Responsibilities
//! - Foundational types: subscriber identifiers, error conventions
//! - Define the **DeviceRegistry** (fixed set of named on/off switches, the
//!   single source of truth for device state)
//! - Define **Commands** (reversible registry mutations: toggle, set, macro)
//! - Define the **CommandHistory** (LIFO undo stack)
//! - Define the **NotificationHub** and the `Observer` contract
//! - Define the **HousePlan** (ordered device enumeration plus the away-mode
//!   sub-list)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or IO crates.

pub mod error;
pub mod id;

pub mod command;
pub mod history;
pub mod notification;
pub mod plan;
pub mod registry;
