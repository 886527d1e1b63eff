//! Command history: the LIFO undo stack.
//!
//! A command sits in the history exactly when its `execute` has run and its
//! one legal `undo` has not. Undo always reverses the most recent
//! not-yet-undone execute; a popped command is discarded and can never be
//! redone.

use crate::command::Command;
use crate::error::DomoError;
use crate::notification::NotificationHub;
use crate::registry::DeviceRegistry;

/// Ordered stack of executed commands awaiting undo.
#[derive(Debug, Default)]
pub struct CommandHistory {
    stack: Vec<Command>,
}

impl CommandHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed command as the most recent entry.
    pub fn push(&mut self, command: Command) {
        self.stack.push(command);
    }

    /// Undo the most recent entry and discard it.
    ///
    /// Returns `Ok(false)` and touches nothing when the history is empty;
    /// having nothing to undo is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when the undone command targets
    /// a device missing from the registry.
    pub fn pop_and_undo(
        &mut self,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
    ) -> Result<bool, DomoError> {
        let Some(mut command) = self.stack.pop() else {
            return Ok(false);
        };
        command.undo(registry, hub)?;
        Ok(true)
    }

    /// Number of commands awaiting undo.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::HousePlan;

    fn fixture() -> (DeviceRegistry, NotificationHub, CommandHistory) {
        let plan = HousePlan::builder()
            .devices(["Lamp", "Heater"])
            .away_device("Lamp")
            .build()
            .unwrap();
        (
            DeviceRegistry::from_plan(&plan),
            NotificationHub::new(),
            CommandHistory::new(),
        )
    }

    fn run(
        mut command: Command,
        registry: &mut DeviceRegistry,
        hub: &mut NotificationHub,
        history: &mut CommandHistory,
    ) {
        command.execute(registry, hub).unwrap();
        history.push(command);
    }

    #[test]
    fn should_return_false_when_history_is_empty() {
        let (mut registry, mut hub, mut history) = fixture();

        let undone = history.pop_and_undo(&mut registry, &mut hub).unwrap();

        assert!(!undone);
        assert!(!registry.get("Lamp").unwrap());
    }

    #[test]
    fn should_undo_most_recent_command_first() {
        let (mut registry, mut hub, mut history) = fixture();
        run(Command::turn_on("Lamp"), &mut registry, &mut hub, &mut history);
        run(Command::turn_on("Heater"), &mut registry, &mut hub, &mut history);

        let undone = history.pop_and_undo(&mut registry, &mut hub).unwrap();

        assert!(undone);
        assert!(registry.get("Lamp").unwrap());
        assert!(!registry.get("Heater").unwrap());
    }

    #[test]
    fn should_discard_undone_commands() {
        let (mut registry, mut hub, mut history) = fixture();
        run(Command::toggle("Lamp"), &mut registry, &mut hub, &mut history);

        assert!(history.pop_and_undo(&mut registry, &mut hub).unwrap());
        assert!(history.is_empty());
        assert!(!history.pop_and_undo(&mut registry, &mut hub).unwrap());
    }

    #[test]
    fn should_count_pushed_commands() {
        let (mut registry, mut hub, mut history) = fixture();
        assert!(history.is_empty());

        run(Command::toggle("Lamp"), &mut registry, &mut hub, &mut history);
        run(Command::toggle("Lamp"), &mut registry, &mut hub, &mut history);

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn should_unwind_interleaved_commands_in_reverse_order() {
        let (mut registry, mut hub, mut history) = fixture();
        run(Command::toggle("Lamp"), &mut registry, &mut hub, &mut history);
        run(Command::turn_off("Lamp"), &mut registry, &mut hub, &mut history);
        run(Command::toggle("Heater"), &mut registry, &mut hub, &mut history);

        while history.pop_and_undo(&mut registry, &mut hub).unwrap() {}

        assert!(!registry.get("Lamp").unwrap());
        assert!(!registry.get("Heater").unwrap());
    }
}
