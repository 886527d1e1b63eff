//! House plan: the ordered device enumeration a controller is built from.
//!
//! A plan lists every device name the registry will hold, in the order the
//! installation presents them, plus the sub-list of devices the away-mode
//! macro turns on (in macro execution order). It is validated once, before
//! a registry ever exists, so registry operations never have to re-check
//! these invariants.

use serde::{Deserialize, Serialize};

use crate::error::{DomoError, ValidationError};

/// Device enumeration of the reference installation.
const DEFAULT_DEVICES: [&str; 13] = [
    "Luz cuartos",
    "Luz sala",
    "Luz cocina",
    "Luz comedor",
    "Estéreo",
    "Televisión",
    "Alexa",
    "Persianas",
    "Aire acondicionado",
    "Seguros puertas",
    "Cámaras",
    "Alarmas",
    "Modo Vacaciones",
];

/// Away-mode sub-list in macro execution order: locks and security gear
/// first, then every room light for the presence simulation.
const DEFAULT_AWAY_MODE: [&str; 8] = [
    "Seguros puertas",
    "Estéreo",
    "Cámaras",
    "Alarmas",
    "Luz cuartos",
    "Luz sala",
    "Luz cocina",
    "Luz comedor",
];

/// An ordered device enumeration plus the away-mode sub-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousePlan {
    /// Ordered device names; becomes the registry's fixed key set.
    pub devices: Vec<String>,
    /// Devices the away-mode macro turns on, in execution order.
    pub away_mode: Vec<String>,
}

impl Default for HousePlan {
    fn default() -> Self {
        Self {
            devices: DEFAULT_DEVICES.iter().map(ToString::to_string).collect(),
            away_mode: DEFAULT_AWAY_MODE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl HousePlan {
    /// Create a builder for constructing a [`HousePlan`].
    #[must_use]
    pub fn builder() -> HousePlanBuilder {
        HousePlanBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] when:
    /// - `devices` is empty ([`ValidationError::NoDevices`])
    /// - a device name is empty ([`ValidationError::EmptyDeviceName`])
    /// - a device name repeats ([`ValidationError::DuplicateDevice`])
    /// - `away_mode` is empty ([`ValidationError::NoAwayDevices`])
    /// - `away_mode` names a device missing from `devices`
    ///   ([`ValidationError::AwayDeviceNotRegistered`])
    pub fn validate(&self) -> Result<(), DomoError> {
        if self.devices.is_empty() {
            return Err(ValidationError::NoDevices.into());
        }
        let mut seen = std::collections::HashSet::new();
        for name in &self.devices {
            if name.is_empty() {
                return Err(ValidationError::EmptyDeviceName.into());
            }
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateDevice(name.clone()).into());
            }
        }
        if self.away_mode.is_empty() {
            return Err(ValidationError::NoAwayDevices.into());
        }
        for name in &self.away_mode {
            if !seen.contains(name.as_str()) {
                return Err(ValidationError::AwayDeviceNotRegistered(name.clone()).into());
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`HousePlan`].
#[derive(Debug, Default)]
pub struct HousePlanBuilder {
    devices: Vec<String>,
    away_mode: Vec<String>,
}

impl HousePlanBuilder {
    /// Append one device to the enumeration.
    #[must_use]
    pub fn device(mut self, name: impl Into<String>) -> Self {
        self.devices.push(name.into());
        self
    }

    /// Append several devices to the enumeration.
    #[must_use]
    pub fn devices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append one device to the away-mode sub-list.
    #[must_use]
    pub fn away_device(mut self, name: impl Into<String>) -> Self {
        self.away_mode.push(name.into());
        self
    }

    /// Append several devices to the away-mode sub-list.
    #[must_use]
    pub fn away_devices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.away_mode.extend(names.into_iter().map(Into::into));
        self
    }

    /// Consume the builder, validate, and return a [`HousePlan`].
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] if the plan violates an invariant;
    /// see [`HousePlan::validate`].
    pub fn build(self) -> Result<HousePlan, DomoError> {
        let plan = HousePlan {
            devices: self.devices,
            away_mode: self.away_mode,
        };
        plan.validate()?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_plan_when_away_devices_are_listed() {
        let plan = HousePlan::builder()
            .devices(["Lamp", "Heater", "Siren"])
            .away_devices(["Siren", "Lamp"])
            .build()
            .unwrap();

        assert_eq!(plan.devices.len(), 3);
        assert_eq!(plan.away_mode, vec!["Siren", "Lamp"]);
    }

    #[test]
    fn should_keep_device_order_as_given() {
        let plan = HousePlan::builder()
            .device("B")
            .device("A")
            .device("C")
            .away_device("A")
            .build()
            .unwrap();

        assert_eq!(plan.devices, vec!["B", "A", "C"]);
    }

    #[test]
    fn should_return_validation_error_when_device_list_is_empty() {
        let result = HousePlan::builder().build();
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::NoDevices))
        ));
    }

    #[test]
    fn should_return_validation_error_when_device_name_is_empty() {
        let result = HousePlan::builder()
            .devices(["Lamp", ""])
            .away_device("Lamp")
            .build();
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::EmptyDeviceName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_device_name_repeats() {
        let result = HousePlan::builder()
            .devices(["Lamp", "Heater", "Lamp"])
            .away_device("Heater")
            .build();
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::DuplicateDevice(name))) if name == "Lamp"
        ));
    }

    #[test]
    fn should_return_validation_error_when_away_list_is_empty() {
        let result = HousePlan::builder().devices(["Lamp"]).build();
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::NoAwayDevices))
        ));
    }

    #[test]
    fn should_return_validation_error_when_away_device_is_not_listed() {
        let result = HousePlan::builder()
            .devices(["Lamp"])
            .away_device("Siren")
            .build();
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::AwayDeviceNotRegistered(name))) if name == "Siren"
        ));
    }

    #[test]
    fn should_provide_thirteen_devices_in_default_plan() {
        let plan = HousePlan::default();
        assert_eq!(plan.devices.len(), 13);
        assert_eq!(plan.devices[0], "Luz cuartos");
        assert_eq!(plan.devices[12], "Modo Vacaciones");
    }

    #[test]
    fn should_validate_default_plan() {
        assert!(HousePlan::default().validate().is_ok());
    }

    #[test]
    fn should_order_default_away_list_security_first_then_lights() {
        let plan = HousePlan::default();
        assert_eq!(plan.away_mode.len(), 8);
        assert_eq!(plan.away_mode[0], "Seguros puertas");
        assert_eq!(plan.away_mode[3], "Alarmas");
        assert_eq!(plan.away_mode[4], "Luz cuartos");
        assert_eq!(plan.away_mode[7], "Luz comedor");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let plan = HousePlan::default();
        let json = serde_json::to_string(&plan).unwrap();
        let parsed: HousePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
