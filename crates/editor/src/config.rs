/// Mutation points available at the start of every editing session.
pub const STARTING_MUTATION_POINTS: f64 = 100.0;

/// Flat cost of deleting an organelle from the layout.
pub const ORGANELLE_REMOVE_COST: f64 = 10.0;

/// Flat cost of relocating an organelle to another hex.
pub const ORGANELLE_MOVE_COST: f64 = 5.0;

/// Mutation points per full point of rigidity change. Rigidity lives in
/// [-1.0, 1.0], so the most expensive possible adjustment is one full sweep
/// across the slider (2.0 * RIGIDITY_COST_SCALE).
pub const RIGIDITY_COST_SCALE: f64 = 20.0;

/// Hard cap on hexes occupied by a single layout. The editor UI stops
/// accepting placements past this; the engine itself only debug-asserts it.
pub const MAX_LAYOUT_HEXES: usize = 256;
