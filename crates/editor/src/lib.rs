//! Cell-editor core: undo/redo history and the mutation point cost engine.
//!
//! The modules here are deliberately free of rendering and input concerns:
//! the surrounding game talks to the editor exclusively through the events
//! and resources registered by [`EditorPlugin`], and reads costs back out of
//! [`mutation_points::MutationBudget`].

use bevy::prelude::*;

pub mod action_history;
pub mod cell_layout;
pub mod config;
pub mod cost_resolver;
pub mod edit_data;
pub mod editor_action;
pub mod hex;
pub mod membrane;
pub mod mutation_points;
pub mod organelles;

#[cfg(test)]
pub mod test_harness;

/// Everything the editor needs: history, layout, budget, and the systems
/// that service UI requests.
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            action_history::UndoRedoPlugin,
            mutation_points::MutationPointsPlugin,
        ));
    }
}
