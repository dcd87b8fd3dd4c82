//! Runtime configuration and builder.

use std::sync::Arc;

use tokio::sync::broadcast;

use technique_core::{BuilderConfig, Catalog, TechniqueStore};

use crate::api::BuilderHandle;
use crate::events::{BuilderEvent, EventBus};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub builder_config: BuilderConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            builder_config: BuilderConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Owns the shared store and hands out [`BuilderHandle`]s.
pub struct Runtime {
    handle: BuilderHandle,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> BuilderHandle {
        self.handle.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<BuilderEvent> {
        self.handle.subscribe()
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Arc<Catalog>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn builder_config(mut self, builder_config: BuilderConfig) -> Self {
        self.config.builder_config = builder_config;
        self
    }

    /// Use a loaded catalog instead of the built-in one.
    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn build(self) -> Runtime {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(Catalog::builtin()));

        tracing::info!(
            effects = catalog.effects.len(),
            reductions = catalog.reductions.len(),
            conditions = catalog.conditions.len(),
            "Technique runtime ready"
        );

        let store = TechniqueStore::with_config(catalog, self.config.builder_config);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        Runtime {
            handle: BuilderHandle::new(store, event_bus),
        }
    }
}
