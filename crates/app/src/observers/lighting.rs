//! Lighting subsystem: simulates presence while the home is empty.

use domo_domain::notification::{AWAY_MODE_ACTIVATED, AWAY_MODE_DEACTIVATED, Observer};

/// Starts a random presence simulation on away-mode activation, restores
/// the previous scene on deactivation, and ignores every other message.
#[derive(Debug, Default)]
pub struct LightingSystem {
    presence_simulation: bool,
}

impl LightingSystem {
    /// Lighting subsystem showing its normal scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the presence simulation is running.
    #[must_use]
    pub fn is_simulating_presence(&self) -> bool {
        self.presence_simulation
    }
}

impl Observer for LightingSystem {
    fn update(&mut self, message: &str) {
        match message {
            AWAY_MODE_ACTIVATED => {
                self.presence_simulation = true;
                tracing::info!("lighting: random presence simulation started");
            }
            AWAY_MODE_DEACTIVATED => {
                self.presence_simulation = false;
                tracing::info!("lighting: restoring previous scene");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_simulation_when_away_mode_activates() {
        let mut system = LightingSystem::new();

        system.update(AWAY_MODE_ACTIVATED);

        assert!(system.is_simulating_presence());
    }

    #[test]
    fn should_stop_simulation_when_away_mode_deactivates() {
        let mut system = LightingSystem::new();
        system.update(AWAY_MODE_ACTIVATED);

        system.update(AWAY_MODE_DEACTIVATED);

        assert!(!system.is_simulating_presence());
    }

    #[test]
    fn should_ignore_unrelated_messages() {
        let mut system = LightingSystem::new();
        system.update(AWAY_MODE_ACTIVATED);

        system.update("device toggled");

        assert!(system.is_simulating_presence());
    }
}
