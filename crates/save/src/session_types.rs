//! Serializable mirrors of the editor's action types (SAVE-02).
//!
//! These types are separate from the editor's canonical types so the wire
//! format stays stable on its own schedule: the editor enums derive `serde`
//! for tooling, while persistence goes through these bitcode mirrors. A
//! session file decodes completely or not at all — unknown variant tags and
//! truncated data surface as decode errors, never as a half-restored history.

use bitcode::{Decode, Encode};

use editor::membrane::MembraneKind;
use editor::organelles::OrganelleKind;

// ---------------------------------------------------------------------------
// Version constants
// ---------------------------------------------------------------------------

/// Current session data version.
/// v1 = starting layout, action list with per-action edit batches, cursor.
pub const CURRENT_SESSION_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Session structs
// ---------------------------------------------------------------------------

/// A complete persisted editing session.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct SessionData {
    /// Session data version. 0 never occurs in valid files and is rejected.
    pub version: u32,
    /// The layout as it was before the first recorded action.
    pub starting_layout: RecordedLayout,
    /// Every action of the session, performed prefix first.
    pub actions: Vec<RecordedAction>,
    /// The undo cursor: how many of `actions` were performed at save time.
    pub cursor: u32,
}

/// One action: the edit batch applied and reverted as a unit.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct RecordedAction {
    pub edits: Vec<RecordedEdit>,
}

/// Serializable mirror of `editor::edit_data::EditData`.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub enum RecordedEdit {
    PlaceOrganelle {
        id: u32,
        kind: RecordedOrganelleKind,
        q: i32,
        r: i32,
        replaced: Option<(u32, RecordedOrganelleKind)>,
    },
    RemoveOrganelle {
        id: u32,
        kind: RecordedOrganelleKind,
        q: i32,
        r: i32,
    },
    MoveOrganelle {
        id: u32,
        kind: RecordedOrganelleKind,
        from_q: i32,
        from_r: i32,
        to_q: i32,
        to_r: i32,
    },
    ChangeMembrane {
        previous: RecordedMembraneKind,
        membrane: RecordedMembraneKind,
    },
    ChangeRigidity {
        previous: f32,
        rigidity: f32,
    },
    NewCell {
        previous: RecordedLayout,
    },
}

/// Serializable mirror of `editor::cell_layout::CellLayout` (visible state
/// only; the id allocator is reconstructed from the recorded ids on load).
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct RecordedLayout {
    /// Occupied hexes as `(q, r, id, kind)`.
    pub organelles: Vec<(i32, i32, u32, RecordedOrganelleKind)>,
    pub membrane: RecordedMembraneKind,
    pub rigidity: f32,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Serializable mirrors of catalog enums
// ---------------------------------------------------------------------------

/// Bitcode-serializable mirror of `OrganelleKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub enum RecordedOrganelleKind {
    Cytoplasm,
    Chloroplast,
    Vacuole,
    Chemoplast,
    Mitochondrion,
    Flagellum,
    Nitrogenase,
    Nucleus,
}

/// Bitcode-serializable mirror of `MembraneKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub enum RecordedMembraneKind {
    Single,
    Double,
    Cellulose,
    Chitin,
}

impl From<OrganelleKind> for RecordedOrganelleKind {
    fn from(kind: OrganelleKind) -> Self {
        match kind {
            OrganelleKind::Cytoplasm => RecordedOrganelleKind::Cytoplasm,
            OrganelleKind::Chloroplast => RecordedOrganelleKind::Chloroplast,
            OrganelleKind::Vacuole => RecordedOrganelleKind::Vacuole,
            OrganelleKind::Chemoplast => RecordedOrganelleKind::Chemoplast,
            OrganelleKind::Mitochondrion => RecordedOrganelleKind::Mitochondrion,
            OrganelleKind::Flagellum => RecordedOrganelleKind::Flagellum,
            OrganelleKind::Nitrogenase => RecordedOrganelleKind::Nitrogenase,
            OrganelleKind::Nucleus => RecordedOrganelleKind::Nucleus,
        }
    }
}

impl From<RecordedOrganelleKind> for OrganelleKind {
    fn from(kind: RecordedOrganelleKind) -> Self {
        match kind {
            RecordedOrganelleKind::Cytoplasm => OrganelleKind::Cytoplasm,
            RecordedOrganelleKind::Chloroplast => OrganelleKind::Chloroplast,
            RecordedOrganelleKind::Vacuole => OrganelleKind::Vacuole,
            RecordedOrganelleKind::Chemoplast => OrganelleKind::Chemoplast,
            RecordedOrganelleKind::Mitochondrion => OrganelleKind::Mitochondrion,
            RecordedOrganelleKind::Flagellum => OrganelleKind::Flagellum,
            RecordedOrganelleKind::Nitrogenase => OrganelleKind::Nitrogenase,
            RecordedOrganelleKind::Nucleus => OrganelleKind::Nucleus,
        }
    }
}

impl From<MembraneKind> for RecordedMembraneKind {
    fn from(kind: MembraneKind) -> Self {
        match kind {
            MembraneKind::Single => RecordedMembraneKind::Single,
            MembraneKind::Double => RecordedMembraneKind::Double,
            MembraneKind::Cellulose => RecordedMembraneKind::Cellulose,
            MembraneKind::Chitin => RecordedMembraneKind::Chitin,
        }
    }
}

impl From<RecordedMembraneKind> for MembraneKind {
    fn from(kind: RecordedMembraneKind) -> Self {
        match kind {
            RecordedMembraneKind::Single => MembraneKind::Single,
            RecordedMembraneKind::Double => MembraneKind::Double,
            RecordedMembraneKind::Cellulose => MembraneKind::Cellulose,
            RecordedMembraneKind::Chitin => MembraneKind::Chitin,
        }
    }
}
