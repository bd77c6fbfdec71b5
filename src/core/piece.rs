//! Pieces and their compact position encoding.
//!
//! A piece's position is a single small integer with four disjoint ranges:
//!
//! | raw       | meaning                                    |
//! |-----------|--------------------------------------------|
//! | `-1`      | in the yard, not yet entered               |
//! | `0..=51`  | cell on the shared 52-cell circuit         |
//! | `52..=56` | cell on the owner's private final stretch  |
//! | `57`      | finished                                   |
//!
//! [`Position::square`] decodes the integer into the tagged [`Square`] view.
//! Anything outside `-1..=57` is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::board::{CIRCUIT_LEN, STRETCH_LEN};

/// Pieces owned by each player.
pub const PIECES_PER_PLAYER: usize = 4;

/// Piece identifier, unique within its owner (0-3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw piece index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the four piece IDs of a player.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECES_PER_PLAYER as u8).map(PieceId)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// Decoded view of a [`Position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    /// Waiting in the yard for a six.
    Yard,
    /// Circuit cell `0..=51`.
    Circuit(u8),
    /// Final-stretch offset `0..=4` (raw `52..=56`).
    Stretch(u8),
    /// Reached the end of the final stretch (raw `57`).
    Finished,
}

/// Compact piece position in `-1..=57`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Position(i8);

impl Position {
    /// In the yard.
    pub const YARD: Position = Position(-1);
    /// First circuit cell.
    pub const CIRCUIT_START: Position = Position(0);
    /// First final-stretch cell.
    pub const STRETCH_START: Position = Position(CIRCUIT_LEN as i8);
    /// Finishing square.
    pub const FINISHED: Position = Position((CIRCUIT_LEN + STRETCH_LEN - 1) as i8);

    /// Build a position from its raw encoding.
    ///
    /// Returns `None` for anything outside `-1..=57`.
    ///
    /// ```
    /// use ludo_engine::core::{Position, Square};
    ///
    /// assert_eq!(Position::new(-1).map(Position::square), Some(Square::Yard));
    /// assert_eq!(Position::new(54).map(Position::square), Some(Square::Stretch(2)));
    /// assert!(Position::new(58).is_none());
    /// ```
    #[must_use]
    pub const fn new(raw: i32) -> Option<Self> {
        if raw >= Self::YARD.0 as i32 && raw <= Self::FINISHED.0 as i32 {
            Some(Self(raw as i8))
        } else {
            None
        }
    }

    /// Circuit cell position.
    #[must_use]
    pub const fn on_circuit(cell: u8) -> Option<Self> {
        if (cell as usize) < CIRCUIT_LEN {
            Some(Self(cell as i8))
        } else {
            None
        }
    }

    /// Raw integer encoding.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0 as i32
    }

    /// Decode into the tagged view.
    #[must_use]
    pub const fn square(self) -> Square {
        match self.0 {
            -1 => Square::Yard,
            n if n < Self::STRETCH_START.0 => Square::Circuit(n as u8),
            n if n < Self::FINISHED.0 => Square::Stretch((n - Self::STRETCH_START.0) as u8),
            _ => Square::Finished,
        }
    }

    #[must_use]
    pub const fn is_yard(self) -> bool {
        self.0 == Self::YARD.0
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 == Self::FINISHED.0
    }

    /// Circuit cell index, if the piece is on the shared circuit.
    #[must_use]
    pub const fn circuit_cell(self) -> Option<u8> {
        match self.square() {
            Square::Circuit(cell) => Some(cell),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Position {
    type Error = String;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Position::new(raw).ok_or_else(|| format!("position {raw} outside -1..=57"))
    }
}

impl From<Position> for i32 {
    fn from(position: Position) -> Self {
        position.raw()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
}

impl Piece {
    /// A piece waiting in the yard.
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self {
            id,
            position: Position::YARD,
        }
    }
}
