//! Player identification, colors, and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Ludo is always played by exactly four players;
//! seat order is also turn order.
//!
//! ## Player
//!
//! A seat's color, its four pieces, and the winner flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};
use crate::board::QUADRANT_LEN;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Player identifier (seat index 0-3).
///
/// Player indices are 0-based: the first player is `PlayerId(0)` (red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this ID names one of the four seats.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PLAYER_COUNT
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(((self.index() + 1) % PLAYER_COUNT) as u8)
    }

    /// Circuit cell where this player's pieces enter play.
    ///
    /// Seats are spaced one quadrant (13 cells) apart.
    #[must_use]
    pub const fn entry_cell(self) -> u8 {
        (self.index() % PLAYER_COUNT) as u8 * QUADRANT_LEN
    }

    /// Fixed color for this seat.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self.index() % PLAYER_COUNT]
    }

    /// Iterate over all four player IDs in turn order.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Seat color. Declaration order is turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; PLAYER_COUNT] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,

    /// Fixed color tag.
    pub color: Color,

    /// Exactly four pieces, indexed by `PieceId`.
    pub pieces: [Piece; PIECES_PER_PLAYER],

    /// Set once, when all four pieces have finished. Never cleared.
    pub is_winner: bool,
}

impl Player {
    /// Create a player with every piece in the yard.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            color: id.color(),
            pieces: std::array::from_fn(|i| Piece::new(PieceId(i as u8))),
            is_winner: false,
        }
    }

    /// Get a piece by ID, or `None` if the ID is out of range.
    #[must_use]
    pub fn piece(&self, piece: PieceId) -> Option<&Piece> {
        self.pieces.get(piece.index())
    }

    /// True when all four pieces sit on the finishing square.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.pieces.iter().all(|p| p.position.is_finished())
    }
}

impl Index<PieceId> for Player {
    type Output = Piece;

    fn index(&self, piece: PieceId) -> &Self::Output {
        &self.pieces[piece.index()]
    }
}

impl IndexMut<PieceId> for Player {
    fn index_mut(&mut self, piece: PieceId) -> &mut Self::Output {
        &mut self.pieces[piece.index()]
    }
}
