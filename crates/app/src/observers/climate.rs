//! Climate subsystem: switches to eco setpoints while the home is empty.

use domo_domain::notification::{AWAY_MODE_ACTIVATED, AWAY_MODE_DEACTIVATED, Observer};

/// Enters eco mode on away-mode activation, restores the previous
/// setpoints on deactivation, and ignores every other message.
#[derive(Debug, Default)]
pub struct ClimateControl {
    eco_mode: bool,
}

impl ClimateControl {
    /// Climate subsystem running its normal setpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether eco setpoints are active.
    #[must_use]
    pub fn is_eco_mode(&self) -> bool {
        self.eco_mode
    }
}

impl Observer for ClimateControl {
    fn update(&mut self, message: &str) {
        match message {
            AWAY_MODE_ACTIVATED => {
                self.eco_mode = true;
                tracing::info!("climate: eco setpoints active");
            }
            AWAY_MODE_DEACTIVATED => {
                self.eco_mode = false;
                tracing::info!("climate: restoring previous setpoints");
            }
            _ => {}
        }
    }
}
