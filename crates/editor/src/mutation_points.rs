//! Mutation point budget for the editing session (ED-034).

use bevy::prelude::*;

use crate::action_history::ActionHistory;
use crate::config::STARTING_MUTATION_POINTS;
use crate::cost_resolver;

/// The session's mutation point pool and the folded net cost of everything
/// currently performed. `spent` is derived state: it is recomputed from the
/// history whenever the history changes, never adjusted incrementally.
#[derive(Resource, Debug, Clone)]
pub struct MutationBudget {
    pub total: f64,
    pub spent: f64,
}

impl Default for MutationBudget {
    fn default() -> Self {
        Self {
            total: STARTING_MUTATION_POINTS,
            spent: 0.0,
        }
    }
}

impl MutationBudget {
    pub fn remaining(&self) -> f64 {
        self.total - self.spent
    }

    /// Whether a candidate whose folded net cost is `net_cost` fits the pool.
    /// `net_cost` comes from `cost_resolver::calculate_cost`, so undoing and
    /// re-spending elsewhere is never double-charged.
    pub fn can_afford(&self, net_cost: f64) -> bool {
        net_cost <= self.total
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Refold the performed history into `spent` whenever the history changed.
pub fn refresh_mutation_points(
    history: Res<ActionHistory>,
    mut budget: ResMut<MutationBudget>,
) {
    if !history.is_changed() {
        return;
    }
    budget.spent = cost_resolver::calculate_cost(history.performed_data(), None);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct MutationPointsPlugin;

impl Plugin for MutationPointsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MutationBudget>().add_systems(
            Update,
            refresh_mutation_points
                .after(crate::action_history::apply_edit_requests)
                .after(crate::action_history::process_undo)
                .after(crate::action_history::process_redo),
        );
    }
}
