//! Device registry: the single source of truth for device on/off state.
//!
//! The key set is fixed when the registry is built from a
//! [`HousePlan`](crate::plan::HousePlan): commands mutate values but can
//! never add or remove devices. The registry also carries the transient
//! macro guard that gates notification delivery while a macro command is
//! mid-execution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDeviceError;
use crate::plan::HousePlan;

/// One device's name and on/off state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Device name as listed in the plan.
    pub name: String,
    /// Whether the device is currently on.
    pub on: bool,
}

/// Fixed-key mapping of device name to on/off state, in plan order.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    /// Plan-ordered store; `index` maps names to positions here.
    devices: Vec<DeviceState>,
    index: HashMap<String, usize>,
    /// Up while a macro command is executing or undoing its steps.
    macro_running: bool,
}

impl DeviceRegistry {
    /// Build a registry with every plan device off.
    ///
    /// Expects a plan that passed [`HousePlan::validate`]; a duplicate
    /// device name would otherwise shadow an earlier entry.
    #[must_use]
    pub fn from_plan(plan: &HousePlan) -> Self {
        let devices: Vec<DeviceState> = plan
            .devices
            .iter()
            .map(|name| DeviceState {
                name: name.clone(),
                on: false,
            })
            .collect();
        let index = devices
            .iter()
            .enumerate()
            .map(|(pos, device)| (device.name.clone(), pos))
            .collect();
        Self {
            devices,
            index,
            macro_running: false,
        }
    }

    fn position(&self, name: &str) -> Result<usize, UnknownDeviceError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| UnknownDeviceError::new(name))
    }

    /// Current state of one device.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<bool, UnknownDeviceError> {
        Ok(self.devices[self.position(name)?].on)
    }

    /// Force one device to the given state. Writing the current value again
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when `name` is not registered.
    pub fn set(&mut self, name: &str, on: bool) -> Result<(), UnknownDeviceError> {
        let pos = self.position(name)?;
        self.devices[pos].on = on;
        Ok(())
    }

    /// Flip one device and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when `name` is not registered.
    pub fn toggle(&mut self, name: &str) -> Result<bool, UnknownDeviceError> {
        let pos = self.position(name)?;
        let device = &mut self.devices[pos];
        device.on = !device.on;
        Ok(device.on)
    }

    /// An independent, plan-ordered copy of every device state for
    /// read-only display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            devices: self.devices.clone(),
        }
    }

    /// Whether a macro command is currently running its steps.
    #[must_use]
    pub fn macro_running(&self) -> bool {
        self.macro_running
    }

    /// Raise the macro guard; [`NotificationHub`] suppresses non-reserved
    /// messages while it is up.
    ///
    /// [`NotificationHub`]: crate::notification::NotificationHub
    pub(crate) fn begin_macro(&mut self) {
        self.macro_running = true;
    }

    pub(crate) fn end_macro(&mut self) {
        self.macro_running = false;
    }
}

/// Plan-ordered copy of the registry taken by
/// [`DeviceRegistry::snapshot`]. Detached from the registry; later
/// mutations do not show through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    devices: Vec<DeviceState>,
}

impl Snapshot {
    /// Device states in plan order.
    #[must_use]
    pub fn devices(&self) -> &[DeviceState] {
        &self.devices
    }

    /// State of one device, `None` when it is not listed.
    #[must_use]
    pub fn is_on(&self, name: &str) -> Option<bool> {
        self.devices
            .iter()
            .find(|device| device.name == name)
            .map(|device| device.on)
    }

    /// Number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the snapshot holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
