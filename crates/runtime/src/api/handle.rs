//! Cloneable façade over the shared technique store.
//!
//! [`BuilderHandle`] serializes every action through one lock: apply,
//! recalculate and publish happen while the lock is held, so readers and
//! subscribers always observe balances in the order they were produced.
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;

use technique_core::{
    Advisory, Balance, BuilderCommand, BuilderState, DamageSpec, DeliveryType, EffectId,
    RangeShape, ReductionId, TechniqueStore, TechniqueSummary, Tier,
};

use super::errors::{Result, RuntimeError};
use crate::events::{BuilderEvent, EventBus};

/// Client-facing handle to interact with the builder
#[derive(Clone)]
pub struct BuilderHandle {
    store: Arc<Mutex<TechniqueStore>>,
    event_bus: EventBus,
}

impl BuilderHandle {
    pub(crate) fn new(store: TechniqueStore, event_bus: EventBus) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            event_bus,
        }
    }

    /// Applies one command and returns the resulting balance.
    pub fn execute(&self, command: BuilderCommand) -> Result<Balance> {
        let action = command.name();
        let is_reset = matches!(command, BuilderCommand::Reset);

        let mut store = self.lock()?;
        store.apply(command);
        let balance = *store.state().balance();

        if is_reset {
            tracing::info!("Technique reset");
            self.event_bus.publish(BuilderEvent::Reset);
            return Ok(balance);
        }

        tracing::debug!(
            action,
            points_spent = balance.points_spent,
            max_points = balance.max_points,
            points_available = balance.points_available,
            "Recalculated"
        );
        if balance.reduction_cap_exceeded {
            tracing::warn!(
                action,
                raw = balance.raw_reduction_total,
                applied = balance.applied_reduction,
                "Reduction cap exceeded"
            );
        }
        self.event_bus.publish(BuilderEvent::Recalculated {
            action: action.to_owned(),
            balance,
        });

        Ok(balance)
    }

    /// Applies commands in order, stopping at the first failure.
    pub fn execute_all(
        &self,
        commands: impl IntoIterator<Item = BuilderCommand>,
    ) -> Result<Balance> {
        let mut balance = *self.lock()?.state().balance();
        for command in commands {
            balance = self.execute(command)?;
        }
        Ok(balance)
    }

    // ===== actions =====

    pub fn set_tier(&self, tier: Option<Tier>) -> Result<Balance> {
        self.execute(BuilderCommand::SetTier(tier))
    }

    pub fn set_delivery_type(&self, delivery: Option<DeliveryType>) -> Result<Balance> {
        self.execute(BuilderCommand::SetDeliveryType(delivery))
    }

    pub fn set_range(&self, range: Option<RangeShape>) -> Result<Balance> {
        self.execute(BuilderCommand::SetRange(range))
    }

    pub fn set_damage(&self, damage: Option<DamageSpec>) -> Result<Balance> {
        self.execute(BuilderCommand::SetDamage(damage))
    }

    pub fn add_effect(&self, id: impl Into<EffectId>, magnitude: i32) -> Result<Balance> {
        self.execute(BuilderCommand::AddEffect {
            id: id.into(),
            magnitude,
        })
    }

    pub fn remove_effect(&self, id: impl Into<EffectId>) -> Result<Balance> {
        self.execute(BuilderCommand::RemoveEffect(id.into()))
    }

    pub fn update_effect(&self, id: impl Into<EffectId>, magnitude: i32) -> Result<Balance> {
        self.execute(BuilderCommand::UpdateEffect {
            id: id.into(),
            magnitude,
        })
    }

    pub fn add_reduction(&self, id: ReductionId, magnitude: i32) -> Result<Balance> {
        self.execute(BuilderCommand::AddReduction { id, magnitude })
    }

    pub fn remove_reduction(&self, id: ReductionId) -> Result<Balance> {
        self.execute(BuilderCommand::RemoveReduction(id))
    }

    pub fn update_reduction(&self, id: ReductionId, magnitude: i32) -> Result<Balance> {
        self.execute(BuilderCommand::UpdateReduction { id, magnitude })
    }

    pub fn reset(&self) -> Result<Balance> {
        self.execute(BuilderCommand::Reset)
    }

    // ===== queries =====

    /// Query the current builder state (read-only snapshot)
    pub fn snapshot(&self) -> Result<BuilderState> {
        Ok(self.lock()?.state().clone())
    }

    pub fn summary(&self, name: impl Into<String>) -> Result<TechniqueSummary> {
        Ok(self.lock()?.summary(name))
    }

    pub fn advisories(&self) -> Result<Vec<Advisory>> {
        Ok(self.lock()?.advisories())
    }

    pub fn can_add_reduction(&self, id: ReductionId) -> Result<bool> {
        Ok(self.lock()?.state().can_add_reduction(id))
    }

    pub fn can_set_reduction_magnitude(&self, id: ReductionId, magnitude: i32) -> Result<bool> {
        Ok(self.lock()?.state().can_set_reduction_magnitude(id, magnitude))
    }

    /// Subscribe to builder events
    pub fn subscribe(&self) -> broadcast::Receiver<BuilderEvent> {
        self.event_bus.subscribe()
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    fn lock(&self) -> Result<MutexGuard<'_, TechniqueStore>> {
        self.store.lock().map_err(|_| RuntimeError::LockPoisoned)
    }
}
