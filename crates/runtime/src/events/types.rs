use serde::{Deserialize, Serialize};
use technique_core::Balance;

/// Events published after every store action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderEvent {
    /// An action re-priced the selection.
    Recalculated {
        /// Action name, e.g. `update_effect`.
        action: String,
        balance: Balance,
    },

    /// The store was cleared.
    Reset,
}
