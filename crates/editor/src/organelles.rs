use serde::{Deserialize, Serialize};

/// Session-scoped identity of a placed organelle.
///
/// Handed out by `CellLayout::allocate_organelle_id` when the editor builds a
/// placement, and carried through every edit that touches the same organelle
/// so that move/remove chains can be matched back to their placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganelleId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrganelleKind {
    #[default]
    Cytoplasm, // 4 MP, filler that every layout starts from
    Chloroplast,   // 6 MP, photosynthesis
    Vacuole,       // 8 MP, compound storage
    Chemoplast,    // 10 MP, hydrogen sulfide metabolism
    Mitochondrion, // 12 MP, aerobic respiration
    Flagellum,     // 15 MP, movement
    Nitrogenase,   // 20 MP, nitrogen fixation
    Nucleus,       // 45 MP, unlocks multicellular editing, at most one
}

/// All organelle kinds, for catalog iteration in the UI and tests.
pub const ALL_ORGANELLE_KINDS: [OrganelleKind; 8] = [
    OrganelleKind::Cytoplasm,
    OrganelleKind::Chloroplast,
    OrganelleKind::Vacuole,
    OrganelleKind::Chemoplast,
    OrganelleKind::Mitochondrion,
    OrganelleKind::Flagellum,
    OrganelleKind::Nitrogenase,
    OrganelleKind::Nucleus,
];

impl OrganelleKind {
    /// Mutation point cost of placing this organelle.
    pub fn cost(self) -> f64 {
        match self {
            OrganelleKind::Cytoplasm => 4.0,
            OrganelleKind::Chloroplast => 6.0,
            OrganelleKind::Vacuole => 8.0,
            OrganelleKind::Chemoplast => 10.0,
            OrganelleKind::Mitochondrion => 12.0,
            OrganelleKind::Flagellum => 15.0,
            OrganelleKind::Nitrogenase => 20.0,
            OrganelleKind::Nucleus => 45.0,
        }
    }

    /// Whether a layout may hold at most one of this kind.
    pub fn is_unique(self) -> bool {
        matches!(self, OrganelleKind::Nucleus)
    }

    pub fn name(self) -> &'static str {
        match self {
            OrganelleKind::Cytoplasm => "Cytoplasm",
            OrganelleKind::Chloroplast => "Chloroplast",
            OrganelleKind::Vacuole => "Vacuole",
            OrganelleKind::Chemoplast => "Chemoplast",
            OrganelleKind::Mitochondrion => "Mitochondrion",
            OrganelleKind::Flagellum => "Flagellum",
            OrganelleKind::Nitrogenase => "Nitrogenase",
            OrganelleKind::Nucleus => "Nucleus",
        }
    }
}
