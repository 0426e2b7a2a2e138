//! Reversible wrapper around one user gesture's edits (ED-032).
//!
//! An `EditorAction` owns one or more `EditData` payloads and knows how to
//! apply them to, and exactly remove them from, the live `CellLayout`. Its
//! lifecycle is a strict two-state toggle; calling `perform` or `revert`
//! from the wrong state is a caller bug and panics.

use serde::{Deserialize, Serialize};

use crate::cell_layout::{CellLayout, PlacedOrganelle};
use crate::edit_data::EditData;

/// Lifecycle state of an action: `NotPerformed ⇄ Performed`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActionState {
    #[default]
    NotPerformed,
    Performed,
}

/// One undoable step of editing: a batch of edits applied and reverted as a
/// unit (a drag placing several cytoplasm hexes is one action).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorAction {
    state: ActionState,
    data: Vec<EditData>,
}

impl EditorAction {
    /// Wrap a batch of edits. Every action carries at least one edit.
    pub fn new(data: Vec<EditData>) -> Self {
        assert!(!data.is_empty(), "an action must carry at least one edit");
        Self {
            state: ActionState::NotPerformed,
            data,
        }
    }

    /// Convenience wrapper for the common single-edit action.
    pub fn single(data: EditData) -> Self {
        Self::new(vec![data])
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    /// The edit payloads, in apply order. This is the read-only view the
    /// cost resolver folds over.
    pub fn data(&self) -> &[EditData] {
        &self.data
    }

    /// Apply every edit to the layout, in order.
    ///
    /// # Panics
    ///
    /// Panics if the action is already performed.
    pub fn perform(&mut self, layout: &mut CellLayout) {
        assert_eq!(
            self.state,
            ActionState::NotPerformed,
            "perform called on an already performed action"
        );
        for edit in &self.data {
            apply_edit(edit, layout);
        }
        self.state = ActionState::Performed;
    }

    /// Exactly invert `perform`, undoing the edits in reverse order.
    ///
    /// # Panics
    ///
    /// Panics if the action has not been performed.
    pub fn revert(&mut self, layout: &mut CellLayout) {
        assert_eq!(
            self.state,
            ActionState::Performed,
            "revert called on an action that is not performed"
        );
        for edit in self.data.iter().rev() {
            revert_edit(edit, layout);
        }
        self.state = ActionState::NotPerformed;
    }
}

fn apply_edit(edit: &EditData, layout: &mut CellLayout) {
    match edit {
        EditData::PlaceOrganelle {
            id,
            kind,
            hex,
            replaced,
        } => {
            let previous = layout.place(
                *hex,
                PlacedOrganelle {
                    id: *id,
                    kind: *kind,
                },
            );
            debug_assert_eq!(previous, *replaced, "recorded occupant out of sync");
        }
        EditData::RemoveOrganelle { id, hex, .. } => {
            let removed = layout.remove(*hex);
            debug_assert_eq!(removed.map(|org| org.id), Some(*id));
        }
        EditData::MoveOrganelle { from, to, .. } => layout.relocate(*from, *to),
        EditData::ChangeMembrane { membrane, .. } => layout.set_membrane(*membrane),
        EditData::ChangeRigidity { rigidity, .. } => layout.set_rigidity(*rigidity),
        EditData::NewCell { .. } => layout.reset(),
    }
}

fn revert_edit(edit: &EditData, layout: &mut CellLayout) {
    match edit {
        EditData::PlaceOrganelle { hex, replaced, .. } => {
            layout.remove(*hex);
            if let Some(previous) = replaced {
                layout.place(*hex, *previous);
            }
        }
        EditData::RemoveOrganelle { id, kind, hex } => {
            let previous = layout.place(
                *hex,
                PlacedOrganelle {
                    id: *id,
                    kind: *kind,
                },
            );
            debug_assert!(previous.is_none(), "hex reoccupied while edit was undone");
        }
        EditData::MoveOrganelle { from, to, .. } => layout.relocate(*to, *from),
        EditData::ChangeMembrane { previous, .. } => layout.set_membrane(*previous),
        EditData::ChangeRigidity { previous, .. } => layout.set_rigidity(*previous),
        EditData::NewCell { previous } => *layout = (**previous).clone(),
    }
}
