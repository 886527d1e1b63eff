//! Commands: reversible units of registry mutation.
//!
//! Every command carries whatever it needs to reverse itself: `execute`
//! performs the forward action and records the prior state, `undo` restores
//! it. The two operations are only meaningful as matched, alternating
//! pairs; the [`CommandHistory`](crate::history::CommandHistory) enforces
//! the pairing by popping each command exactly once.

mod set;
mod toggle;

pub use set::SetCommand;
pub use toggle::ToggleCommand;

use crate::error::DomoError;
use crate::notification::{
    AWAY_MODE_ACTIVATED, AWAY_MODE_DEACTIVATED, AWAY_MODE_LIGHTING, NotificationHub,
};
use crate::registry::DeviceRegistry;

/// A reversible unit of state change over the device registry.
#[derive(Debug, Clone)]
pub enum Command {
    /// Flip one device.
    Toggle(ToggleCommand),
    /// Force one device on or off.
    Set(SetCommand),
    /// An ordered sequence of single-device commands applied as a unit.
    Macro(MacroCommand),
}

impl Command {
    /// Command that flips `device`.
    #[must_use]
    pub fn toggle(device: impl Into<String>) -> Self {
        Self::Toggle(ToggleCommand::new(device))
    }

    /// Command that forces `device` on.
    #[must_use]
    pub fn turn_on(device: impl Into<String>) -> Self {
        Self::Set(SetCommand::new(device, true))
    }

    /// Command that forces `device` off.
    #[must_use]
    pub fn turn_off(device: impl Into<String>) -> Self {
        Self::Set(SetCommand::new(device, false))
    }

    /// The away-mode macro: turn on every given device in order, then
    /// announce activation followed by the presence-simulation lighting
    /// message. Undoing restores each device in reverse order and announces
    /// deactivation.
    #[must_use]
    pub fn away_mode<I, S>(devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Macro(MacroCommand {
            steps: devices
                .into_iter()
                .map(|device| SetCommand::new(device, true))
                .collect(),
            notify_on_execute: vec![
                AWAY_MODE_ACTIVATED.to_string(),
                AWAY_MODE_LIGHTING.to_string(),
            ],
            notify_on_undo: vec![AWAY_MODE_DEACTIVATED.to_string()],
        })
    }

    /// Perform the forward action, recording what `undo` needs.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when a targeted device is not
    /// registered. A macro propagates the first failing step without
    /// rolling back its completed steps.
    pub fn execute(
        &mut self,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
    ) -> Result<(), DomoError> {
        match self {
            Self::Toggle(command) => Ok(command.execute(registry)?),
            Self::Set(command) => Ok(command.execute(registry)?),
            Self::Macro(command) => command.execute(registry, hub),
        }
    }

    /// Exactly reverse the matching `execute`.
    ///
    /// Must follow a matching [`execute`](Self::execute); the history
    /// guarantees that by popping each command exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when a targeted device is not
    /// registered.
    pub fn undo(
        &mut self,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
    ) -> Result<(), DomoError> {
        match self {
            Self::Toggle(command) => Ok(command.undo(registry)?),
            Self::Set(command) => Ok(command.undo(registry)?),
            Self::Macro(command) => command.undo(registry, hub),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toggle(command) => write!(f, "toggle({})", command.device()),
            Self::Set(command) if command.target() => {
                write!(f, "turn_on({})", command.device())
            }
            Self::Set(command) => write!(f, "turn_off({})", command.device()),
            Self::Macro(command) => write!(f, "macro({} steps)", command.steps.len()),
        }
    }
}

/// An ordered sequence of single-device commands executed and undone as a
/// unit, with messages published once the unit completes.
///
/// While the steps run, the registry's macro guard is up and the hub
/// suppresses every non-reserved message (see
/// [`NotificationHub::publish`]). The guard drops before the completion
/// messages go out, so all of them, reserved or not, reach subscribers.
#[derive(Debug, Clone)]
pub struct MacroCommand {
    steps: Vec<SetCommand>,
    notify_on_execute: Vec<String>,
    notify_on_undo: Vec<String>,
}

impl MacroCommand {
    /// Run every step in listed order under the macro guard, then publish
    /// the completion messages.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] from the first failing step.
    /// The guard is lowered either way; completion messages only go out
    /// when every step succeeded.
    pub fn execute(
        &mut self,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
    ) -> Result<(), DomoError> {
        registry.begin_macro();
        let outcome = self
            .steps
            .iter_mut()
            .try_for_each(|step| step.execute(registry));
        registry.end_macro();
        outcome?;
        for message in &self.notify_on_execute {
            hub.publish(message, registry);
        }
        Ok(())
    }

    /// Undo every step in reverse order under the macro guard, then publish
    /// the undo messages.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] from the first failing step.
    pub fn undo(
        &mut self,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
    ) -> Result<(), DomoError> {
        registry.begin_macro();
        let outcome = self
            .steps
            .iter_mut()
            .rev()
            .try_for_each(|step| step.undo(registry));
        registry.end_macro();
        outcome?;
        for message in &self.notify_on_undo {
            hub.publish(message, registry);
        }
        Ok(())
    }

    /// The devices the steps target, in execution order.
    #[must_use]
    pub fn devices(&self) -> Vec<&str> {
        self.steps.iter().map(SetCommand::device).collect()
    }
}
