//! # TestEditor — headless integration test harness for the cell editor
//!
//! Wraps `bevy::app::App` + `EditorPlugin` so integration tests can drive
//! the editor the way the UI does — through events — without a window or
//! renderer, then assert on the resulting resources.

use bevy::app::App;
use bevy::prelude::*;

use crate::action_history::{ActionHistory, EditRequested, RedoRequested, UndoRequested};
use crate::cell_layout::{CellLayout, PlacedOrganelle};
use crate::edit_data::EditData;
use crate::editor_action::EditorAction;
use crate::hex::Hex;
use crate::membrane::MembraneKind;
use crate::mutation_points::MutationBudget;
use crate::organelles::OrganelleKind;
use crate::EditorPlugin;

/// A headless Bevy App wrapping `EditorPlugin` for integration testing.
pub struct TestEditor {
    app: App,
}

impl TestEditor {
    /// Fresh editing session: empty layout, full mutation point pool.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(EditorPlugin);
        // Run one update so startup work and resource init settle.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Override the session's mutation point pool.
    pub fn with_budget(mut self, total: f64) -> Self {
        self.app
            .world_mut()
            .resource_mut::<MutationBudget>()
            .total = total;
        self
    }

    /// Place an organelle as a recorded edit before the test body runs.
    pub fn with_organelle(mut self, kind: OrganelleKind, hex: Hex) -> Self {
        self.place(kind, hex);
        self
    }

    /// Seed the layout with an organelle that predates the session (part of
    /// the organism as it evolved), bypassing the history: editing around it
    /// costs full price, unlike edits to this session's own placements.
    pub fn with_preexisting_organelle(mut self, kind: OrganelleKind, hex: Hex) -> Self {
        {
            let mut layout = self.app.world_mut().resource_mut::<CellLayout>();
            let org = PlacedOrganelle {
                id: layout.allocate_organelle_id(),
                kind,
            };
            let replaced = layout.place(hex, org);
            assert!(
                replaced.is_none(),
                "with_preexisting_organelle on occupied hex {hex:?}"
            );
        }
        self
    }

    // -----------------------------------------------------------------------
    // Player operations (event-driven, one update per request)
    // -----------------------------------------------------------------------

    /// Request placing `kind` at `hex`.
    pub fn place(&mut self, kind: OrganelleKind, hex: Hex) {
        let action = {
            let mut layout = self.app.world_mut().resource_mut::<CellLayout>();
            EditorAction::single(EditData::PlaceOrganelle {
                id: layout.allocate_organelle_id(),
                kind,
                hex,
                replaced: layout.organelle_at(hex),
            })
        };
        self.request(action);
    }

    /// Request removing whatever occupies `hex`. Panics if the hex is empty —
    /// that is a broken test, not a player flow.
    pub fn remove_at(&mut self, hex: Hex) {
        let action = {
            let layout = self.app.world().resource::<CellLayout>();
            let org = layout
                .organelle_at(hex)
                .unwrap_or_else(|| panic!("remove_at on empty hex {hex:?}"));
            EditorAction::single(EditData::RemoveOrganelle {
                id: org.id,
                kind: org.kind,
                hex,
            })
        };
        self.request(action);
    }

    /// Request moving the occupant of `from` to the free hex `to`.
    pub fn move_organelle(&mut self, from: Hex, to: Hex) {
        let action = {
            let layout = self.app.world().resource::<CellLayout>();
            let org = layout
                .organelle_at(from)
                .unwrap_or_else(|| panic!("move_organelle from empty hex {from:?}"));
            EditorAction::single(EditData::MoveOrganelle {
                id: org.id,
                kind: org.kind,
                from,
                to,
            })
        };
        self.request(action);
    }

    /// Request switching the membrane.
    pub fn change_membrane(&mut self, membrane: MembraneKind) {
        let action = {
            let layout = self.app.world().resource::<CellLayout>();
            EditorAction::single(EditData::ChangeMembrane {
                previous: layout.membrane(),
                membrane,
            })
        };
        self.request(action);
    }

    /// Request dragging the rigidity slider to `rigidity`.
    pub fn change_rigidity(&mut self, rigidity: f32) {
        let action = {
            let layout = self.app.world().resource::<CellLayout>();
            EditorAction::single(EditData::ChangeRigidity {
                previous: layout.rigidity(),
                rigidity,
            })
        };
        self.request(action);
    }

    /// Request wiping the layout back to a fresh cell.
    pub fn new_cell(&mut self) {
        let action = {
            let layout = self.app.world().resource::<CellLayout>();
            EditorAction::single(EditData::new_cell(layout))
        };
        self.request(action);
    }

    pub fn undo(&mut self) {
        self.app.world_mut().send_event(UndoRequested);
        self.app.update();
    }

    pub fn redo(&mut self) {
        self.app.world_mut().send_event(RedoRequested);
        self.app.update();
    }

    fn request(&mut self, action: EditorAction) {
        self.app.world_mut().send_event(EditRequested(action));
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn layout(&self) -> &CellLayout {
        self.app.world().resource::<CellLayout>()
    }

    pub fn history(&self) -> &ActionHistory {
        self.app.world().resource::<ActionHistory>()
    }

    pub fn budget(&self) -> &MutationBudget {
        self.app.world().resource::<MutationBudget>()
    }

    /// The folded net cost of everything performed so far.
    pub fn net_cost(&self) -> f64 {
        self.budget().spent
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
