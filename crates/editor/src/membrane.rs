use serde::{Deserialize, Serialize};

/// Membrane type of the edited cell.
///
/// Switching membrane costs the *target* membrane's mutation points; the
/// cost resolver collapses repeated switches so only the final one is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MembraneKind {
    #[default]
    Single, // 10 MP, baseline lipid bilayer
    Double,    // 15 MP, tougher, slower osmoregulation
    Cellulose, // 20 MP, rigid plant-style wall
    Chitin,    // 25 MP, fungal wall, resists toxins
}

/// All membrane kinds, for catalog iteration in the UI and tests.
pub const ALL_MEMBRANE_KINDS: [MembraneKind; 4] = [
    MembraneKind::Single,
    MembraneKind::Double,
    MembraneKind::Cellulose,
    MembraneKind::Chitin,
];

impl MembraneKind {
    /// Mutation point cost of switching to this membrane.
    pub fn cost(self) -> f64 {
        match self {
            MembraneKind::Single => 10.0,
            MembraneKind::Double => 15.0,
            MembraneKind::Cellulose => 20.0,
            MembraneKind::Chitin => 25.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MembraneKind::Single => "Single",
            MembraneKind::Double => "Double",
            MembraneKind::Cellulose => "Cellulose",
            MembraneKind::Chitin => "Chitin",
        }
    }
}
