//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]` (no
//! `String` variants). The domain owns construction-time validation and the
//! unknown-device lookup failure; everything else wraps these.

use thiserror::Error;

/// Top-level domain error.
#[derive(Debug, Error)]
pub enum DomoError {
    /// A house plan violated a construction-time invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation named a device the registry does not know.
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),
}

/// Construction-time invariant violations for a
/// [`HousePlan`](crate::plan::HousePlan).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The device enumeration is empty.
    #[error("device list is empty")]
    NoDevices,

    /// A device name is the empty string.
    #[error("device name is empty")]
    EmptyDeviceName,

    /// The same device name appears twice in the enumeration.
    #[error("duplicate device name: {0}")]
    DuplicateDevice(String),

    /// The away-mode sub-list is empty.
    #[error("away-mode device list is empty")]
    NoAwayDevices,

    /// The away-mode sub-list names a device missing from the enumeration.
    #[error("away-mode device is not in the device list: {0}")]
    AwayDeviceNotRegistered(String),
}

/// An operation targeted a device name absent from the registry.
///
/// The registry's key set is fixed at construction, so this always means a
/// caller-side mistake and is surfaced rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown device: {name}")]
pub struct UnknownDeviceError {
    /// The name that was looked up.
    pub name: String,
}

impl UnknownDeviceError {
    /// Error for a lookup of `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
