//! Move log entries.
//!
//! The log is append-only and feeds statistics and replays. Rules never
//! read it back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{PieceId, Position};
use super::player::PlayerId;

/// Reference to one piece on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    pub player: PlayerId,
    pub piece: PieceId,
}

impl PieceRef {
    #[must_use]
    pub const fn new(player: PlayerId, piece: PieceId) -> Self {
        Self { player, piece }
    }
}

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    /// The player who moved.
    pub player: PlayerId,

    /// The piece that moved.
    pub piece: PieceId,

    pub from: Position,

    pub to: Position,

    /// Die face consumed by the move.
    pub dice_value: u8,

    /// Wall-clock time the move was applied (ms since the Unix epoch).
    pub timestamp: u64,

    /// Opposing pieces sent back to the yard by this move.
    /// Rarely more than one, so kept inline.
    pub captured: SmallVec<[PieceRef; 2]>,
}

impl GameMove {
    /// Create a move record with no captures.
    #[must_use]
    pub fn new(
        player: PlayerId,
        piece: PieceId,
        from: Position,
        to: Position,
        dice_value: u8,
        timestamp: u64,
    ) -> Self {
        Self {
            player,
            piece,
            from,
            to,
            dice_value,
            timestamp,
            captured: SmallVec::new(),
        }
    }

    /// Attach the pieces captured by this move.
    #[must_use]
    pub fn with_captures(mut self, captured: &[PieceRef]) -> Self {
        self.captured = SmallVec::from_slice(captured);
        self
    }

    /// True if the move sent at least one opposing piece home.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}
