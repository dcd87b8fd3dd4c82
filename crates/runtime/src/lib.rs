//! Thread-safe runtime around the technique builder.
//!
//! The core store is single-writer and synchronous. This crate puts it behind
//! one mutual-exclusion boundary so any number of callers can share it through
//! a cloneable [`BuilderHandle`], and publishes every recalculated balance on
//! an event bus.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the configuration and builder
//! - [`api`] exposes the handle and error types clients interact with
//! - [`events`] provides the broadcast event bus
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{BuilderHandle, Result, RuntimeError};
pub use events::{BuilderEvent, EventBus};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
