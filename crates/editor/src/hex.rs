//! Axial hex coordinates for the cell layout.
//!
//! The editor grid is a pointy-top hex grid addressed by axial `(q, r)`
//! coordinates. The third cube coordinate is implicit (`s = -q - r`), which
//! keeps the type small enough to copy freely and use as a map key.

use serde::{Deserialize, Serialize};

/// One hex position in the layout, in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

/// The six axial direction offsets, counter-clockwise from "east".
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0 },
    Hex { q: 1, r: -1 },
    Hex { q: 0, r: -1 },
    Hex { q: -1, r: 0 },
    Hex { q: -1, r: 1 },
    Hex { q: 0, r: 1 },
];

impl Hex {
    /// The center of the layout, where the first organelle of a new cell goes.
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Component-wise sum, used for walking in a hex direction.
    pub fn offset(self, other: Hex) -> Hex {
        Hex {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }

    /// The six adjacent hexes.
    pub fn neighbours(self) -> [Hex; 6] {
        HEX_DIRECTIONS.map(|d| self.offset(d))
    }

    /// Hex grid distance (number of steps between two hexes).
    pub fn distance(self, other: Hex) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.q + self.r - other.q - other.r).abs();
        ((dq + dr + ds) / 2) as u32
    }
}
