//! Undo/Redo history for cell edits (ED-030).
//!
//! A single ordered list of `EditorAction` plus a cursor. Everything below
//! the cursor is performed; everything at or above it is the redo tail.
//! Adding a new action while the cursor sits inside the list discards the
//! tail in one truncate — a new edit branch overwrites the undone one.
//!
//! Recording and performing are deliberately one operation (`add_action`
//! performs before appending), so the history and the live layout can never
//! disagree about what has happened.
//!
//! Unlike a plain editor undo stack there is no capacity cap: the cost
//! resolver folds over the full window back to the last layout reset, so
//! dropping old entries would corrupt the mutation point total.

use bevy::prelude::*;

use crate::cell_layout::CellLayout;
use crate::edit_data::EditData;
use crate::editor_action::EditorAction;

// ---------------------------------------------------------------------------
// ActionHistory resource
// ---------------------------------------------------------------------------

/// Ordered action list plus the performed/not-performed boundary cursor.
#[derive(Resource, Default, Clone, Debug)]
pub struct ActionHistory {
    actions: Vec<EditorAction>,
    action_index: usize,
}

impl ActionHistory {
    pub fn can_undo(&self) -> bool {
        self.action_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.action_index < self.actions.len()
    }

    /// Revert the most recent performed action. Returns `false` (and does
    /// nothing) at the bottom of the stack.
    pub fn undo(&mut self, layout: &mut CellLayout) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.action_index -= 1;
        self.actions[self.action_index].revert(layout);
        true
    }

    /// Re-perform the action just above the cursor. Returns `false` (and
    /// does nothing) at the top of the stack.
    pub fn redo(&mut self, layout: &mut CellLayout) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.actions[self.action_index].perform(layout);
        self.action_index += 1;
        true
    }

    /// Discard the redo tail, perform `action`, and append it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor and the action list disagree after truncation
    /// (an internal invariant breach, not a user-facing condition), or if
    /// `action` was already performed.
    pub fn add_action(&mut self, mut action: EditorAction, layout: &mut CellLayout) {
        self.actions.truncate(self.action_index);
        assert_eq!(
            self.action_index,
            self.actions.len(),
            "history cursor desynced from action list after truncation"
        );
        action.perform(layout);
        self.actions.push(action);
        self.action_index += 1;
    }

    /// Position of the performed/not-performed boundary.
    pub fn action_index(&self) -> usize {
        self.action_index
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The full action list, performed prefix first. Used by persistence;
    /// the list cannot be mutated from outside.
    pub fn actions(&self) -> &[EditorAction] {
        &self.actions
    }

    /// Read-only ordered view over the edits of all performed actions —
    /// the input the cost resolver folds over.
    pub fn performed_data(&self) -> impl Iterator<Item = &EditData> {
        self.actions[..self.action_index]
            .iter()
            .flat_map(|action| action.data().iter())
    }
}

// ---------------------------------------------------------------------------
// Events for triggering edits and undo/redo from the UI layer
// ---------------------------------------------------------------------------

/// The player asked for an edit; the carried action is performed and recorded.
#[derive(Event, Clone)]
pub struct EditRequested(pub EditorAction);

/// Marker event: the player wants to undo.
#[derive(Event)]
pub struct UndoRequested;

/// Marker event: the player wants to redo.
#[derive(Event)]
pub struct RedoRequested;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Perform and record requested edits.
pub fn apply_edit_requests(
    mut events: EventReader<EditRequested>,
    mut history: ResMut<ActionHistory>,
    mut layout: ResMut<CellLayout>,
) {
    for request in events.read() {
        history.add_action(request.0.clone(), &mut layout);
    }
}

/// Process undo requests. Requests at the bottom of the stack are no-ops.
pub fn process_undo(
    mut events: EventReader<UndoRequested>,
    mut history: ResMut<ActionHistory>,
    mut layout: ResMut<CellLayout>,
) {
    for _ in events.read() {
        history.undo(&mut layout);
    }
}

/// Process redo requests. Requests at the top of the stack are no-ops.
pub fn process_redo(
    mut events: EventReader<RedoRequested>,
    mut history: ResMut<ActionHistory>,
    mut layout: ResMut<CellLayout>,
) {
    for _ in events.read() {
        history.redo(&mut layout);
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct UndoRedoPlugin;

impl Plugin for UndoRedoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionHistory>()
            .init_resource::<CellLayout>()
            .add_event::<EditRequested>()
            .add_event::<UndoRequested>()
            .add_event::<RedoRequested>()
            .add_systems(
                Update,
                (
                    apply_edit_requests,
                    process_undo.after(apply_edit_requests),
                    process_redo.after(apply_edit_requests),
                ),
            );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
