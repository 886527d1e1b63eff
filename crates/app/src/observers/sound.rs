//! Sound alert: decorates another observer with an audible chime.

use domo_domain::notification::Observer;

/// Wraps an observer, delegating every message to it and then sounding a
/// chime. Explicit composition: the wrapped observer is held and called,
/// so decorators can stack.
pub struct SoundAlert {
    inner: Box<dyn Observer>,
    chimes: u32,
}

impl SoundAlert {
    /// Decorate `inner` with a chime per delivered message.
    #[must_use]
    pub fn new(inner: Box<dyn Observer>) -> Self {
        Self { inner, chimes: 0 }
    }

    /// How many chimes have sounded.
    #[must_use]
    pub fn chimes(&self) -> u32 {
        self.chimes
    }
}

impl Observer for SoundAlert {
    fn update(&mut self, message: &str) {
        self.inner.update(message);
        self.chimes += 1;
        tracing::info!(%message, "sound: chime");
    }
}
