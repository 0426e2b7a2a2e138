use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::MAX_LAYOUT_HEXES;
use crate::hex::Hex;
use crate::membrane::MembraneKind;
use crate::organelles::{OrganelleId, OrganelleKind};

/// An organelle sitting on a hex of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrganelle {
    pub id: OrganelleId,
    pub kind: OrganelleKind,
}

/// The live editor model: the cell as currently shown to the player.
///
/// Every `EditorAction` mutates this and nothing else. The layout does not
/// know about costs or history; it only enforces structural rules (one
/// organelle per hex, relocation source must be occupied) and panics on
/// violations, which indicate a bug in the action that issued the mutation.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CellLayout {
    organelles: HashMap<Hex, PlacedOrganelle>,
    membrane: MembraneKind,
    rigidity: f32,
    name: String,
    next_organelle_id: u32,
}

/// Equality is over the visible model only. The id counter is allocation
/// bookkeeping and is excluded, so "state after undo equals state before
/// perform" holds even though building the action consumed an id.
impl PartialEq for CellLayout {
    fn eq(&self, other: &Self) -> bool {
        self.organelles == other.organelles
            && self.membrane == other.membrane
            && self.rigidity == other.rigidity
            && self.name == other.name
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            organelles: HashMap::new(),
            membrane: MembraneKind::default(),
            rigidity: 0.0,
            name: "Primum".to_string(),
            next_organelle_id: 0,
        }
    }
}

impl CellLayout {
    /// Hand out a fresh organelle identity. Called once when the editor
    /// builds a placement, never during perform/revert, so replaying the
    /// same action list always reproduces the same ids.
    pub fn allocate_organelle_id(&mut self) -> OrganelleId {
        let id = OrganelleId(self.next_organelle_id);
        self.next_organelle_id += 1;
        id
    }

    /// Ensure future allocations start at or above `floor`. Used when a
    /// persisted session is restored by replay: replay consumes recorded ids
    /// without allocating, so the counter must be pushed past them.
    pub fn raise_organelle_id_floor(&mut self, floor: u32) {
        self.next_organelle_id = self.next_organelle_id.max(floor);
    }

    pub fn organelle_at(&self, hex: Hex) -> Option<PlacedOrganelle> {
        self.organelles.get(&hex).copied()
    }

    pub fn organelle_count(&self) -> usize {
        self.organelles.len()
    }

    /// Locate an organelle by identity. Linear scan; layouts are tiny.
    pub fn find_organelle(&self, id: OrganelleId) -> Option<(Hex, PlacedOrganelle)> {
        self.organelles
            .iter()
            .find(|(_, org)| org.id == id)
            .map(|(hex, org)| (*hex, *org))
    }

    pub fn has_organelle_of(&self, kind: OrganelleKind) -> bool {
        self.organelles.values().any(|org| org.kind == kind)
    }

    /// Whether `hex` touches at least one occupied hex. The UI requires new
    /// placements to keep the cell contiguous; an empty layout accepts any hex.
    pub fn is_adjacent_to_occupied(&self, hex: Hex) -> bool {
        if self.organelles.is_empty() {
            return true;
        }
        hex.neighbours()
            .iter()
            .any(|n| self.organelles.contains_key(n))
    }

    /// Insert an organelle, returning the previous occupant if the hex was
    /// taken (placement has replace semantics).
    pub fn place(&mut self, hex: Hex, organelle: PlacedOrganelle) -> Option<PlacedOrganelle> {
        debug_assert!(
            self.organelles.len() < MAX_LAYOUT_HEXES,
            "layout exceeded MAX_LAYOUT_HEXES"
        );
        self.organelles.insert(hex, organelle)
    }

    /// Remove the organelle at `hex`, if any.
    pub fn remove(&mut self, hex: Hex) -> Option<PlacedOrganelle> {
        self.organelles.remove(&hex)
    }

    /// Move an organelle between hexes. The source must be occupied and the
    /// destination free; anything else is a bug in the calling action.
    pub fn relocate(&mut self, from: Hex, to: Hex) {
        let org = self
            .organelles
            .remove(&from)
            .unwrap_or_else(|| panic!("relocate from empty hex {from:?}"));
        let previous = self.organelles.insert(to, org);
        assert!(
            previous.is_none(),
            "relocate onto occupied hex {to:?} (holds {previous:?})"
        );
    }

    pub fn membrane(&self) -> MembraneKind {
        self.membrane
    }

    pub fn set_membrane(&mut self, membrane: MembraneKind) {
        self.membrane = membrane;
    }

    pub fn rigidity(&self) -> f32 {
        self.rigidity
    }

    /// Rigidity is a slider in [-1, 1]; out-of-range values are a caller bug.
    pub fn set_rigidity(&mut self, rigidity: f32) {
        assert!(
            (-1.0..=1.0).contains(&rigidity),
            "rigidity {rigidity} outside [-1, 1]"
        );
        self.rigidity = rigidity;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Wipe the layout back to the new-cell default.
    pub fn reset(&mut self) {
        *self = CellLayout::default();
    }

    /// Iterate the occupied hexes in no particular order.
    pub fn organelles(&self) -> impl Iterator<Item = (Hex, PlacedOrganelle)> + '_ {
        self.organelles.iter().map(|(hex, org)| (*hex, *org))
    }
}
