//! Set command: force one device on or off, remembering how to put it back.

use crate::error::UnknownDeviceError;
use crate::registry::DeviceRegistry;

/// Forces one device to a fixed target state; `undo` restores the replaced
/// value rather than flipping, so forcing an already-on device on undoes
/// back to on.
#[derive(Debug, Clone)]
pub struct SetCommand {
    device: String,
    target: bool,
    prior: Option<bool>,
}

impl SetCommand {
    /// Command that forces `device` to `target`.
    #[must_use]
    pub fn new(device: impl Into<String>, target: bool) -> Self {
        Self {
            device: device.into(),
            target,
            prior: None,
        }
    }

    /// The targeted device name.
    #[must_use]
    pub fn device(&self) -> &str {
        &self.device
    }

    /// The state `execute` forces the device into.
    #[must_use]
    pub fn target(&self) -> bool {
        self.target
    }

    /// Force the device to the target state and record the replaced value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when the device is not registered.
    pub fn execute(&mut self, registry: &mut DeviceRegistry) -> Result<(), UnknownDeviceError> {
        let prior = registry.get(&self.device)?;
        registry.set(&self.device, self.target)?;
        self.prior = Some(prior);
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
