//! Event bus implementation.

use tokio::sync::broadcast;

use super::types::BuilderEvent;

/// Broadcast event bus.
///
/// Publishing never blocks; subscribers that fall behind lose the oldest
/// events.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BuilderEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: BuilderEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for builder events");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BuilderEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
