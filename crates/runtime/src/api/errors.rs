//! Error types surfaced by the runtime API.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A caller panicked while holding the store lock. The state may be
    /// mid-action and is no longer trusted.
    #[error("technique store lock poisoned")]
    LockPoisoned,
}
