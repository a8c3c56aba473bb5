//! Conway's Game of Life (B3/S23) classification.
//!
//! The transition step counts living neighbors and asks these two
//! functions what happens next; nothing else in the crate encodes the rule.

/// A living cell with this many living neighbors stays alive.
/// Fewer than two is underpopulation, more than three is overcrowding.
pub const fn survives(neighbors: u8) -> bool {
    matches!(neighbors, 2 | 3)
}

/// A dead cell with this many living neighbors comes alive.
pub const fn is_born(neighbors: u8) -> bool {
    neighbors == 3
}
