//! Notification hub: ordered fan-out of string messages to observers.
//!
//! Delivery order is subscription order. While a macro command is running
//! its steps, every message except the two reserved away-mode strings is
//! suppressed entirely, so mid-macro device churn does not reach
//! subscribers; the reserved strings always go through so subscribers
//! reliably learn of macro start and end.

use crate::id::SubscriberId;
use crate::registry::DeviceRegistry;

/// Reserved: published once the away-mode macro has turned everything on.
pub const AWAY_MODE_ACTIVATED: &str = "away mode activated";

/// Reserved: published once the away-mode macro has been undone.
pub const AWAY_MODE_DEACTIVATED: &str = "away mode deactivated";

/// Published right after activation to announce the presence simulation.
/// Not reserved; it is delivered because the macro publishes it after
/// lowering the guard.
pub const AWAY_MODE_LIGHTING: &str = "lights set to random presence simulation";

/// Whether `message` is one of the two reserved away-mode strings that
/// bypass mid-macro suppression.
#[must_use]
pub fn is_reserved(message: &str) -> bool {
    matches!(message, AWAY_MODE_ACTIVATED | AWAY_MODE_DEACTIVATED)
}

/// A subscriber reacting to published messages.
///
/// Built-in subscribers react to the two reserved away-mode strings and
/// ignore everything else; other messages are still delivered to them.
pub trait Observer {
    /// Receive one published message.
    fn update(&mut self, message: &str);
}

/// Ordered list of observers with macro-aware delivery.
///
/// Subscriptions are keyed by [`SubscriberId`], so the same observer type
/// can be registered several times; each registration is delivered to
/// separately and removed separately.
#[derive(Default)]
pub struct NotificationHub {
    subscribers: Vec<(SubscriberId, Box<dyn Observer>)>,
}

impl NotificationHub {
    /// Hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; later subscribers are notified later.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriberId {
        let id = SubscriberId::new();
        self.subscribers.push((id, observer));
        id
    }

    /// Drop one subscription. Returns `false` (and removes nothing) when
    /// the id is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let Some(pos) = self
            .subscribers
            .iter()
            .position(|(subscriber_id, _)| *subscriber_id == id)
        else {
            return false;
        };
        self.subscribers.remove(pos);
        true
    }

    /// Deliver `message` to every subscriber in subscription order.
    ///
    /// Suppressed entirely, reaching no observer, when the registry's macro
    /// guard is up and the message is not reserved.
    pub fn publish(&mut self, message: &str, registry: &DeviceRegistry) {
        if registry.macro_running() && !is_reserved(message) {
            return;
        }
        for (_, observer) in &mut self.subscribers {
            observer.update(message);
        }
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
