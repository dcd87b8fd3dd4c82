//! Broadcast event bus for builder events.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::BuilderEvent;
