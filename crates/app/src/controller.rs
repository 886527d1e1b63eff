//! Home controller: the facade the presentation layer drives.
//!
//! Owns the device registry, the command history, and the notification hub
//! for one home. Constructed once at process start and passed by reference
//! to whatever drives it; there is no global instance.

use domo_domain::command::Command;
use domo_domain::error::DomoError;
use domo_domain::history::CommandHistory;
use domo_domain::id::SubscriberId;
use domo_domain::notification::{NotificationHub, Observer};
use domo_domain::plan::HousePlan;
use domo_domain::registry::{DeviceRegistry, Snapshot};

/// Use-case surface over one home's registry, history, and hub.
pub struct HomeController {
    plan: HousePlan,
    registry: DeviceRegistry,
    history: CommandHistory,
    hub: NotificationHub,
    /// Persistent away state. Distinct from the registry's transient macro
    /// guard, which is only up while a macro is running its steps.
    away: bool,
}

impl HomeController {
    /// Validate `plan` and build a controller with every device off.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] when the plan violates a
    /// construction invariant.
    pub fn new(plan: HousePlan) -> Result<Self, DomoError> {
        plan.validate()?;
        let registry = DeviceRegistry::from_plan(&plan);
        Ok(Self {
            plan,
            registry,
            history: CommandHistory::new(),
            hub: NotificationHub::new(),
            away: false,
        })
    }

    /// Execute `command` and record it as the most recent history entry.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when the command targets an
    /// unregistered device; nothing is recorded in that case.
    #[tracing::instrument(skip(self, command), fields(command_kind = %command))]
    pub fn execute_command(&mut self, mut command: Command) -> Result<(), DomoError> {
        command.execute(&mut self.registry, &mut self.hub)?;
        self.history.push(command);
        tracing::debug!("command executed");
        Ok(())
    }

    /// Undo the most recent not-yet-undone command.
    ///
    /// Returns `Ok(false)` when there was nothing to undo, so callers can
    /// report that without treating it as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when the undone command targets
    /// an unregistered device.
    #[tracing::instrument(skip(self))]
    pub fn undo_last(&mut self) -> Result<bool, DomoError> {
        let undone = self
            .history
            .pop_and_undo(&mut self.registry, &mut self.hub)?;
        if undone {
            tracing::debug!("most recent command undone");
        } else {
            tracing::debug!("nothing to undo");
        }
        Ok(undone)
    }

    /// Flip between home and away, returning the new away state.
    ///
    /// HOME→AWAY executes a fresh away-mode macro over the plan's away
    /// list. AWAY→HOME undoes the most recent history entry, assuming it is
    /// still that macro: a command executed while away would be undone in
    /// its place (see [`undo_last`](Self::undo_last)).
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::UnknownDevice`] when the away list names an
    /// unregistered device; plans validated by
    /// [`HomeController::new`] cannot hit this.
    #[tracing::instrument(skip(self))]
    pub fn toggle_away_mode(&mut self) -> Result<bool, DomoError> {
        if self.away {
            self.undo_last()?;
            self.away = false;
        } else {
            let command = Command::away_mode(self.plan.away_mode.iter().cloned());
            self.execute_command(command)?;
            self.away = true;
        }
        tracing::info!(away = self.away, "away mode toggled");
        Ok(self.away)
    }

    /// Current away state.
    #[must_use]
    pub fn is_away(&self) -> bool {
        self.away
    }

    /// Plan-ordered copy of every device state for display.
    #[must_use]
    pub fn device_snapshot(&self) -> Snapshot {
        self.registry.snapshot()
    }

    /// Number of commands awaiting undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Register an observer; later subscribers are notified later.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriberId {
        self.hub.subscribe(observer)
    }

    /// Drop one subscription; `false` when the id is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.hub.unsubscribe(id)
    }
}
