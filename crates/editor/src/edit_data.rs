//! Edit payloads and the interference contract between them (ED-031).
//!
//! Every user-visible edit is one `EditData` value: what was edited, where,
//! and enough of the prior state to revert it. `EditData` also answers the
//! two questions the cost resolver asks: "how do you relate to this later
//! edit?" (`interference_with`) and "what is the merged form of the two of
//! you?" (`combine`).

use serde::{Deserialize, Serialize};

use crate::cell_layout::{CellLayout, PlacedOrganelle};
use crate::config::{ORGANELLE_MOVE_COST, ORGANELLE_REMOVE_COST, RIGIDITY_COST_SCALE};
use crate::hex::Hex;
use crate::membrane::MembraneKind;
use crate::organelles::{OrganelleId, OrganelleKind};

// ---------------------------------------------------------------------------
// Interference
// ---------------------------------------------------------------------------

/// How a later edit relates to an earlier one.
///
/// Always evaluated as `earlier.interference_with(&later)`; the later edit
/// is the one allowed to replace, cancel, or absorb the earlier one. Callers
/// must never pass an edit to its own interference check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interference {
    /// Independent edits; both costs apply.
    NoInterference,
    /// The later edit supersedes the earlier one; only the later cost applies.
    ReplacesOther,
    /// The two edits negate each other; neither cost applies.
    CancelsOut,
    /// The pair merges into a single edit whose cost may differ from the sum.
    Combinable,
}

// ---------------------------------------------------------------------------
// EditData
// ---------------------------------------------------------------------------

/// The payload of one semantic edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditData {
    /// An organelle was placed. `replaced` holds the hex's previous occupant
    /// (placement has replace semantics) so the edit can be reverted.
    PlaceOrganelle {
        id: OrganelleId,
        kind: OrganelleKind,
        hex: Hex,
        replaced: Option<PlacedOrganelle>,
    },
    /// An organelle was deleted from the layout.
    RemoveOrganelle {
        id: OrganelleId,
        kind: OrganelleKind,
        hex: Hex,
    },
    /// An organelle was relocated to a free hex.
    MoveOrganelle {
        id: OrganelleId,
        kind: OrganelleKind,
        from: Hex,
        to: Hex,
    },
    /// The membrane was switched. Costs the target membrane's points.
    ChangeMembrane {
        previous: MembraneKind,
        membrane: MembraneKind,
    },
    /// The rigidity slider was dragged. Cost scales with the net delta.
    ChangeRigidity { previous: f32, rigidity: f32 },
    /// The layout was wiped back to a fresh cell. Partitions cost history:
    /// nothing before this edit contributes mutation points.
    NewCell { previous: Box<CellLayout> },
}

/// Cost of a rigidity adjustment from `previous` to `rigidity`.
pub fn rigidity_cost(previous: f32, rigidity: f32) -> f64 {
    (rigidity - previous).abs() as f64 * RIGIDITY_COST_SCALE
}

impl EditData {
    /// Snapshot constructor for the layout-wiping edit.
    pub fn new_cell(current: &CellLayout) -> EditData {
        EditData::NewCell {
            previous: Box::new(current.clone()),
        }
    }

    /// Mutation point cost of this edit at face value, before any folding.
    pub fn cost(&self) -> f64 {
        match self {
            EditData::PlaceOrganelle { kind, .. } => kind.cost(),
            EditData::RemoveOrganelle { .. } => ORGANELLE_REMOVE_COST,
            EditData::MoveOrganelle { .. } => ORGANELLE_MOVE_COST,
            EditData::ChangeMembrane { membrane, .. } => membrane.cost(),
            EditData::ChangeRigidity { previous, rigidity } => rigidity_cost(*previous, *rigidity),
            EditData::NewCell { .. } => 0.0,
        }
    }

    /// Whether cost bookkeeping before this edit becomes irrelevant once it
    /// is performed.
    pub fn resets_history(&self) -> bool {
        matches!(self, EditData::NewCell { .. })
    }

    /// Classify how `later` relates to this edit.
    ///
    /// Pure; `self` is always the earlier edit of the pair. Kinds that do not
    /// know each other fall through to `NoInterference`.
    pub fn interference_with(&self, later: &EditData) -> Interference {
        use EditData::*;
        match (self, later) {
            // A placement followed by the removal of the same organelle is a
            // no-op, wherever the organelle ended up in between.
            (PlaceOrganelle { id, .. }, RemoveOrganelle { id: later_id, .. })
                if id == later_id =>
            {
                Interference::CancelsOut
            }
            // Moving a freshly placed organelle folds into placing it at the
            // destination; the player pays placement, not placement + move.
            (PlaceOrganelle { id, .. }, MoveOrganelle { id: later_id, .. })
                if id == later_id =>
            {
                Interference::Combinable
            }
            // A later placement on the same hex buries the earlier one.
            (PlaceOrganelle { hex, .. }, PlaceOrganelle { hex: later_hex, .. })
                if hex == later_hex =>
            {
                Interference::ReplacesOther
            }
            // Removing an organelle and placing the same kind back on the
            // same hex restores the status quo.
            (
                RemoveOrganelle { kind, hex, .. },
                PlaceOrganelle {
                    kind: later_kind,
                    hex: later_hex,
                    ..
                },
            ) if kind == later_kind && hex == later_hex => Interference::CancelsOut,
            // Two moves of the same organelle chain into one net move, or
            // cancel outright when the second returns it to where it started.
            (
                MoveOrganelle { id, from, .. },
                MoveOrganelle {
                    id: later_id,
                    to: later_to,
                    ..
                },
            ) if id == later_id => {
                if later_to == from {
                    Interference::CancelsOut
                } else {
                    Interference::Combinable
                }
            }
            // Moving then deleting collapses to deleting from the original hex.
            (MoveOrganelle { id, .. }, RemoveOrganelle { id: later_id, .. })
                if id == later_id =>
            {
                Interference::Combinable
            }
            // Membrane switches: returning to the starting membrane cancels,
            // any other second switch simply wins.
            (
                ChangeMembrane { previous, .. },
                ChangeMembrane {
                    membrane: later_membrane,
                    ..
                },
            ) => {
                if later_membrane == previous {
                    Interference::CancelsOut
                } else {
                    Interference::ReplacesOther
                }
            }
            // Rigidity drags merge into one net adjustment; a zero net delta
            // cancels.
            (
                ChangeRigidity { previous, .. },
                ChangeRigidity {
                    rigidity: later_rigidity,
                    ..
                },
            ) => {
                if later_rigidity == previous {
                    Interference::CancelsOut
                } else {
                    Interference::Combinable
                }
            }
            _ => Interference::NoInterference,
        }
    }

    /// Merge this edit with a later one into the single edit representing
    /// their net effect. `self` must be the earlier edit of the pair.
    ///
    /// # Panics
    ///
    /// Panics unless `self.interference_with(later)` is `Combinable`; calling
    /// it otherwise is a contract violation by the caller.
    pub fn combine(&self, later: &EditData) -> EditData {
        use EditData::*;
        match (self, later) {
            (
                PlaceOrganelle {
                    id, kind, replaced, ..
                },
                MoveOrganelle {
                    id: later_id, to, ..
                },
            ) if id == later_id => PlaceOrganelle {
                id: *id,
                kind: *kind,
                hex: *to,
                replaced: *replaced,
            },
            (
                MoveOrganelle { id, kind, from, .. },
                MoveOrganelle {
                    id: later_id,
                    to: later_to,
                    ..
                },
            ) if id == later_id && later_to != from => MoveOrganelle {
                id: *id,
                kind: *kind,
                from: *from,
                to: *later_to,
            },
            (
                MoveOrganelle { id, kind, from, .. },
                RemoveOrganelle { id: later_id, .. },
            ) if id == later_id => RemoveOrganelle {
                id: *id,
                kind: *kind,
                hex: *from,
            },
            (
                ChangeRigidity { previous, .. },
                ChangeRigidity {
                    rigidity: later_rigidity,
                    ..
                },
            ) if later_rigidity != previous => ChangeRigidity {
                previous: *previous,
                rigidity: *later_rigidity,
            },
            _ => panic!("combine called on a non-combinable pair: {self:?} vs {later:?}"),
        }
    }
}
