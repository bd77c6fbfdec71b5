//! Board geometry: circuit layout constants, marked cells, occupancy.
//!
//! - `coords`: display coordinates on the 15x15 grid
//!
//! The board has no rule authority of its own. The engine consults
//! [`occupancy`] to find capture victims and [`is_safe_cell`] when the safe
//! cell policy is enabled.

pub mod coords;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameState, PieceRef};

pub use coords::{circuit_index_at, locate, Coord, GRID_SIZE};

/// Cells on the shared circuit.
pub const CIRCUIT_LEN: usize = 52;

/// Cells between consecutive players' entry cells.
pub const QUADRANT_LEN: u8 = 13;

/// Cells on each private final stretch, including the finishing square.
pub const STRETCH_LEN: usize = 6;

/// Circuit cells marked safe on the board.
pub const SAFE_CELLS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Entry cell for each seat, in turn order.
pub const START_CELLS: [u8; 4] = [0, 13, 26, 39];

/// True if `cell` is one of the marked safe cells.
#[must_use]
pub fn is_safe_cell(cell: u8) -> bool {
    SAFE_CELLS.contains(&cell)
}

/// True if `cell` is a seat's entry cell.
#[must_use]
pub fn is_start_cell(cell: u8) -> bool {
    START_CELLS.contains(&cell)
}

/// Pieces on each occupied circuit cell.
///
/// Yard, stretch and finished pieces are not on the circuit and never appear.
pub type Occupancy = FxHashMap<u8, SmallVec<[PieceRef; 4]>>;

/// Build the circuit occupancy map for a state.
///
/// Pieces are listed in seat order, then piece order.
#[must_use]
pub fn occupancy(state: &GameState) -> Occupancy {
    let mut cells = Occupancy::default();

    for player in state.players() {
        for piece in &player.pieces {
            if let Some(cell) = piece.position.circuit_cell() {
                cells
                    .entry(cell)
                    .or_default()
                    .push(PieceRef::new(player.id, piece.id));
            }
        }
    }

    cells
}
