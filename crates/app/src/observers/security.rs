//! Security subsystem: arms and disarms with away mode.

use domo_domain::notification::{AWAY_MODE_ACTIVATED, AWAY_MODE_DEACTIVATED, Observer};

/// Arms cameras and alarms on away-mode activation, disarms on
/// deactivation, and ignores every other message.
#[derive(Debug, Default)]
pub struct SecuritySystem {
    armed: bool,
}

impl SecuritySystem {
    /// Disarmed security subsystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cameras and alarms are armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Observer for SecuritySystem {
    fn update(&mut self, message: &str) {
        match message {
            AWAY_MODE_ACTIVATED => {
                self.armed = true;
                tracing::info!("security: arming cameras and alarms");
            }
            AWAY_MODE_DEACTIVATED => {
                self.armed = false;
                tracing::info!("security: disarming cameras and alarms");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_arm_when_away_mode_activates() {
        let mut system = SecuritySystem::new();

        system.update(AWAY_MODE_ACTIVATED);

        assert!(system.is_armed());
    }

    #[test]
    fn should_disarm_when_away_mode_deactivates() {
        let mut system = SecuritySystem::new();
        system.update(AWAY_MODE_ACTIVATED);

        system.update(AWAY_MODE_DEACTIVATED);

        assert!(!system.is_armed());
    }

    #[test]
    fn should_ignore_unrelated_messages() {
        let mut system = SecuritySystem::new();
        system.update(AWAY_MODE_ACTIVATED);

        system.update("device toggled");

        assert!(system.is_armed());
    }
}
