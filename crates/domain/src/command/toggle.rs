//! Toggle command: flip one device, remembering how to put it back.

use crate::error::UnknownDeviceError;
use crate::registry::DeviceRegistry;

/// Flips one device's state; `undo` restores the value it replaced.
///
/// The prior value lives in a slot populated by `execute` and consumed by
/// `undo`. Re-running `execute` without an intervening `undo` overwrites
/// the slot, so only the latest flip can be reversed; the command history
/// keeps the pairing strict by popping each entry exactly once.
#[derive(Debug, Clone)]
pub struct ToggleCommand {
    device: String,
    prior: Option<bool>,
}

impl ToggleCommand {
    /// Command that flips `device`.
    #[must_use]
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            prior: None,
        }
    }

    /// The targeted device name.
    #[must_use]
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Flip the device and record the replaced value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when the device is not registered.
    pub fn execute(&mut self, registry: &mut DeviceRegistry) -> Result<(), UnknownDeviceError> {
        let now_on = registry.toggle(&self.device)?;
        self.prior = Some(!now_on);
        Ok(())
    }

    /// Restore the value recorded by the matching `execute`.
    ///
    /// Without a prior `execute` there is nothing to restore and the
    /// registry is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when the device is not registered.
    pub fn undo(&mut self, registry: &mut DeviceRegistry) -> Result<(), UnknownDeviceError> {
        let Some(prior) = self.prior.take() else {
            return Ok(());
        };
        registry.set(&self.device, prior)
    }
}
