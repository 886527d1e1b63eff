//! # domo-app
//!
//! Application layer: the home controller facade and the built-in
//! notification subsystems.
//!
//! ## Responsibilities
//! - Provide the **`HomeController`** use-case surface:
//!   - execute and undo commands against the one registry
//!   - flip away mode on and off
//!   - expose read-only snapshots for display
//!   - manage observer subscriptions
//! - Provide the **built-in observers** (security, climate, lighting), the
//!   sound-alert decorator, and kind-keyed observer construction
//! - Orchestrate domain objects without knowing *how* they are rendered
//!
//! ## Dependency rule
//! Depends on `domo-domain` only. Never imports the binary; the binary
//! depends on *this* crate, not the reverse.

pub mod controller;
pub mod observers;
