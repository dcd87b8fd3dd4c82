//! Reduction gating shared by every caller.
//!
//! Once the cap is exceeded, new reductions and magnitude increases are
//! blocked while decreases and removals stay allowed.

use super::state::BuilderState;
use crate::catalog::ReductionId;

impl BuilderState {
    /// Whether `id` may be offered at all in the current build.
    pub fn reduction_available(&self, id: ReductionId) -> bool {
        match id {
            ReductionId::NonOffensive => self.non_offensive_available(),
            _ => true,
        }
    }

    pub fn can_add_reduction(&self, id: ReductionId) -> bool {
        if self.reduction(id).is_some() {
            return true;
        }
        !self.balance.reduction_cap_exceeded && self.reduction_available(id)
    }

    pub fn can_set_reduction_magnitude(&self, id: ReductionId, magnitude: i32) -> bool {
        if magnitude <= 0 {
            return true;
        }
        match self.reduction(id) {
            Some(current) if magnitude <= current.magnitude => true,
            Some(_) => !self.balance.reduction_cap_exceeded,
            None => self.can_add_reduction(id),
        }
    }
}
