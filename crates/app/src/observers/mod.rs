//! Built-in notification subsystems.
//!
//! Each subsystem reacts to the two reserved away-mode messages and ignores
//! everything else. Reactions are local state changes plus a log line;
//! nothing here touches the device registry.

mod climate;
mod lighting;
mod security;
mod sound;

pub use climate::ClimateControl;
pub use lighting::LightingSystem;
pub use security::SecuritySystem;
pub use sound::SoundAlert;

use domo_domain::notification::Observer;

/// The built-in subsystem kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverKind {
    /// Cameras and alarms ([`SecuritySystem`]).
    Security,
    /// Heating and cooling setpoints ([`ClimateControl`]).
    Climate,
    /// Presence-simulation lighting ([`LightingSystem`]).
    Lighting,
}

/// Construct a boxed built-in observer of the given kind.
#[must_use]
pub fn build_observer(kind: ObserverKind) -> Box<dyn Observer> {
    match kind {
        ObserverKind::Security => Box::new(SecuritySystem::new()),
        ObserverKind::Climate => Box::new(ClimateControl::new()),
        ObserverKind::Lighting => Box::new(LightingSystem::new()),
    }
}
