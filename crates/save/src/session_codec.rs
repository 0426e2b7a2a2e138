// ---------------------------------------------------------------------------
// Conversions between live editor types and their recorded mirrors
// ---------------------------------------------------------------------------
//
// Recording is infallible: any live session can be described. Restoring is
// fallible: recorded data comes from disk, so every structural assumption
// the editor types enforce with panics (rigidity range, non-empty actions,
// one organelle per hex) is checked here and surfaced as a `SaveError`
// before any editor type gets built.

use editor::action_history::ActionHistory;
use editor::cell_layout::{CellLayout, PlacedOrganelle};
use editor::edit_data::EditData;
use editor::editor_action::EditorAction;
use editor::hex::Hex;
use editor::organelles::OrganelleId;

use crate::save_error::SaveError;
use crate::session_types::{
    RecordedAction, RecordedEdit, RecordedLayout, SessionData, CURRENT_SESSION_VERSION,
};

// ---------------------------------------------------------------------------
// Recording (live -> mirror)
// ---------------------------------------------------------------------------

/// Describe a live session for persistence.
pub fn record_session(history: &ActionHistory, starting_layout: &CellLayout) -> SessionData {
    SessionData {
        version: CURRENT_SESSION_VERSION,
        starting_layout: record_layout(starting_layout),
        actions: history
            .actions()
            .iter()
            .map(|action| RecordedAction {
                edits: action.data().iter().map(record_edit).collect(),
            })
            .collect(),
        cursor: history.action_index() as u32,
    }
}

/// Describe a layout. Organelles are sorted by hex so identical layouts
/// always produce identical bytes.
pub fn record_layout(layout: &CellLayout) -> RecordedLayout {
    let mut organelles: Vec<(i32, i32, u32, _)> = layout
        .organelles()
        .map(|(hex, org)| (hex.q, hex.r, org.id.0, org.kind.into()))
        .collect();
    organelles.sort_unstable_by_key(|&(q, r, ..)| (q, r));
    RecordedLayout {
        organelles,
        membrane: layout.membrane().into(),
        rigidity: layout.rigidity(),
        name: layout.name().to_string(),
    }
}

fn record_edit(edit: &EditData) -> RecordedEdit {
    match edit {
        EditData::PlaceOrganelle {
            id,
            kind,
            hex,
            replaced,
        } => RecordedEdit::PlaceOrganelle {
            id: id.0,
            kind: (*kind).into(),
            q: hex.q,
            r: hex.r,
            replaced: replaced.map(|org| (org.id.0, org.kind.into())),
        },
        EditData::RemoveOrganelle { id, kind, hex } => RecordedEdit::RemoveOrganelle {
            id: id.0,
            kind: (*kind).into(),
            q: hex.q,
            r: hex.r,
        },
        EditData::MoveOrganelle { id, kind, from, to } => RecordedEdit::MoveOrganelle {
            id: id.0,
            kind: (*kind).into(),
            from_q: from.q,
            from_r: from.r,
            to_q: to.q,
            to_r: to.r,
        },
        EditData::ChangeMembrane { previous, membrane } => RecordedEdit::ChangeMembrane {
            previous: (*previous).into(),
            membrane: (*membrane).into(),
        },
        EditData::ChangeRigidity { previous, rigidity } => RecordedEdit::ChangeRigidity {
            previous: *previous,
            rigidity: *rigidity,
        },
        EditData::NewCell { previous } => RecordedEdit::NewCell {
            previous: record_layout(previous),
        },
    }
}

// ---------------------------------------------------------------------------
// Restoring (mirror -> live, validated)
// ---------------------------------------------------------------------------

/// Rebuild a layout, rejecting data the live type would panic on.
pub fn layout_from_recorded(recorded: &RecordedLayout) -> Result<CellLayout, SaveError> {
    if !(-1.0..=1.0).contains(&recorded.rigidity) {
        return Err(SaveError::Corrupted(format!(
            "layout rigidity {} outside [-1, 1]",
            recorded.rigidity
        )));
    }
    let mut layout = CellLayout::default();
    layout.set_membrane(recorded.membrane.into());
    layout.set_rigidity(recorded.rigidity);
    layout.set_name(recorded.name.clone());
    for &(q, r, id, kind) in &recorded.organelles {
        let previous = layout.place(
            Hex::new(q, r),
            PlacedOrganelle {
                id: OrganelleId(id),
                kind: kind.into(),
            },
        );
        if previous.is_some() {
            return Err(SaveError::Corrupted(format!(
                "layout lists hex ({q}, {r}) twice"
            )));
        }
    }
    Ok(layout)
}

/// Rebuild an action, rejecting empty edit batches.
pub fn action_from_recorded(recorded: &RecordedAction) -> Result<EditorAction, SaveError> {
    if recorded.edits.is_empty() {
        return Err(SaveError::Corrupted(
            "recorded action carries no edits".to_string(),
        ));
    }
    let edits = recorded
        .edits
        .iter()
        .map(edit_from_recorded)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EditorAction::new(edits))
}

fn edit_from_recorded(recorded: &RecordedEdit) -> Result<EditData, SaveError> {
    let edit = match recorded {
        RecordedEdit::PlaceOrganelle {
            id,
            kind,
            q,
            r,
            replaced,
        } => EditData::PlaceOrganelle {
            id: OrganelleId(*id),
            kind: (*kind).into(),
            hex: Hex::new(*q, *r),
            replaced: replaced.map(|(rid, rkind)| PlacedOrganelle {
                id: OrganelleId(rid),
                kind: rkind.into(),
            }),
        },
        RecordedEdit::RemoveOrganelle { id, kind, q, r } => EditData::RemoveOrganelle {
            id: OrganelleId(*id),
            kind: (*kind).into(),
            hex: Hex::new(*q, *r),
        },
        RecordedEdit::MoveOrganelle {
            id,
            kind,
            from_q,
            from_r,
            to_q,
            to_r,
        } => EditData::MoveOrganelle {
            id: OrganelleId(*id),
            kind: (*kind).into(),
            from: Hex::new(*from_q, *from_r),
            to: Hex::new(*to_q, *to_r),
        },
        RecordedEdit::ChangeMembrane { previous, membrane } => EditData::ChangeMembrane {
            previous: (*previous).into(),
            membrane: (*membrane).into(),
        },
        RecordedEdit::ChangeRigidity { previous, rigidity } => {
            for value in [*previous, *rigidity] {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(SaveError::Corrupted(format!(
                        "rigidity edit value {value} outside [-1, 1]"
                    )));
                }
            }
            EditData::ChangeRigidity {
                previous: *previous,
                rigidity: *rigidity,
            }
        }
        RecordedEdit::NewCell { previous } => EditData::NewCell {
            previous: Box::new(layout_from_recorded(previous)?),
        },
    };
    Ok(edit)
}

// ---------------------------------------------------------------------------
// Id bookkeeping
// ---------------------------------------------------------------------------

/// The highest organelle id mentioned anywhere in the session, if any.
/// The restored layout's allocator is pushed past this so new placements
/// can never collide with recorded identities.
pub fn session_max_id(data: &SessionData) -> Option<u32> {
    let layout_ids = |layout: &RecordedLayout| {
        layout
            .organelles
            .iter()
            .map(|&(_, _, id, _)| id)
            .max()
    };

    let mut max_id = layout_ids(&data.starting_layout);
    for action in &data.actions {
        for edit in &action.edits {
            let edit_max = match edit {
                RecordedEdit::PlaceOrganelle { id, replaced, .. } => {
                    Some((*id).max(replaced.map(|(rid, _)| rid).unwrap_or(0)))
                }
                RecordedEdit::RemoveOrganelle { id, .. }
                | RecordedEdit::MoveOrganelle { id, .. } => Some(*id),
                RecordedEdit::ChangeMembrane { .. } | RecordedEdit::ChangeRigidity { .. } => None,
                RecordedEdit::NewCell { previous } => layout_ids(previous),
            };
            max_id = match (max_id, edit_max) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            };
        }
    }
    max_id
}
