//! Display coordinates on the 15x15 board grid.
//!
//! Pure lookup tables, consulted only by renderers:
//! - `CIRCUIT`: 52 cells traced clockwise around the cross-shaped track,
//!   starting at red's entry cell
//! - `YARDS`: four waiting slots per seat, picked by piece id
//! - `STRETCHES`: six final-stretch cells per seat, ending next to the centre
//!
//! Stored circuit positions are already global cell indices, so the circuit
//! table is indexed by position directly and the seat only selects the yard
//! and stretch tables. Each seat's quadrant is the previous seat's rotated
//! 90 degrees clockwise about the centre cell.

use serde::{Deserialize, Serialize};

use super::{CIRCUIT_LEN, STRETCH_LEN};
use crate::core::{PieceId, PlayerId, Position, Square, PIECES_PER_PLAYER, PLAYER_COUNT};

/// Cells along each side of the grid.
pub const GRID_SIZE: u8 = 15;

/// A grid cell; `x` grows rightwards, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Rotate 90 degrees clockwise about the centre cell.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::new(GRID_SIZE - 1 - self.y, self.x)
    }
}

const fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y)
}

#[rustfmt::skip]
const CIRCUIT: [Coord; CIRCUIT_LEN] = [
    // Red quadrant, up the bottom arm then along the left arm
    c(6, 13), c(6, 12), c(6, 11), c(6, 10), c(6, 9),
    c(5, 8), c(4, 8), c(3, 8), c(2, 8), c(1, 8), c(0, 8),
    c(0, 7), c(0, 6),
    // Blue
    c(1, 6), c(2, 6), c(3, 6), c(4, 6), c(5, 6),
    c(6, 5), c(6, 4), c(6, 3), c(6, 2), c(6, 1), c(6, 0),
    c(7, 0), c(8, 0),
    // Yellow
    c(8, 1), c(8, 2), c(8, 3), c(8, 4), c(8, 5),
    c(9, 6), c(10, 6), c(11, 6), c(12, 6), c(13, 6), c(14, 6),
    c(14, 7), c(14, 8),
    // Green
    c(13, 8), c(12, 8), c(11, 8), c(10, 8), c(9, 8),
    c(8, 9), c(8, 10), c(8, 11), c(8, 12), c(8, 13), c(8, 14),
    c(7, 14), c(6, 14),
];

#[rustfmt::skip]
const YARDS: [[Coord; PIECES_PER_PLAYER]; PLAYER_COUNT] = [
    [c(1, 11), c(3, 11), c(1, 13), c(3, 13)],
    [c(3, 1), c(3, 3), c(1, 1), c(1, 3)],
    [c(13, 3), c(11, 3), c(13, 1), c(11, 1)],
    [c(11, 13), c(11, 11), c(13, 13), c(13, 11)],
];

#[rustfmt::skip]
const STRETCHES: [[Coord; STRETCH_LEN]; PLAYER_COUNT] = [
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9), c(7, 8)],
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7), c(6, 7)],
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5), c(7, 6)],
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7), c(8, 7)],
];

/// Grid cell of a circuit index.
#[must_use]
pub fn circuit_coord(cell: u8) -> Option<Coord> {
    CIRCUIT.get(cell as usize).copied()
}

/// Grid cell of a yard slot.
#[must_use]
pub fn yard_coord(player: PlayerId, piece: PieceId) -> Option<Coord> {
    YARDS.get(player.index())?.get(piece.index()).copied()
}

/// Grid cell of a final-stretch offset (`0` is the first cell, `5` the finish).
#[must_use]
pub fn stretch_coord(player: PlayerId, offset: u8) -> Option<Coord> {
    STRETCHES.get(player.index())?.get(offset as usize).copied()
}

/// Map a piece to its grid cell.
///
/// Returns `None` only for out-of-range player or piece ids.
///
/// ```
/// use ludo_engine::board::{locate, Coord};
/// use ludo_engine::core::{PieceId, PlayerId, Position};
///
/// let red = PlayerId::new(0);
/// let entry = Position::new(0).unwrap();
/// assert_eq!(locate(red, PieceId::new(0), entry), Some(Coord::new(6, 13)));
/// assert_eq!(locate(red, PieceId::new(0), Position::FINISHED), Some(Coord::new(7, 8)));
/// ```
#[must_use]
pub fn locate(player: PlayerId, piece: PieceId, position: Position) -> Option<Coord> {
    if !player.is_valid() || piece.index() >= PIECES_PER_PLAYER {
        return None;
    }

    match position.square() {
        Square::Yard => yard_coord(player, piece),
        Square::Circuit(cell) => circuit_coord(cell),
        Square::Stretch(offset) => stretch_coord(player, offset),
        Square::Finished => stretch_coord(player, (STRETCH_LEN - 1) as u8),
    }
}

/// Circuit index shown at a grid cell, if the cell is on the circuit.
#[must_use]
pub fn circuit_index_at(coord: Coord) -> Option<u8> {
    CIRCUIT.iter().position(|&cell| cell == coord).map(|i| i as u8)
}
