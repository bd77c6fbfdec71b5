//! Engine and load errors.
//!
//! Exactly two things can go wrong in play: rolling while a roll is pending,
//! and asking for a move the rules do not allow. The rejection reason is
//! carried alongside the latter so drivers can explain it.
//!
//! `StateError` covers the other door into a game: a deserialized
//! `GameState` that breaks an invariant the engine relies on.

use thiserror::Error;

use super::piece::PieceId;
use super::player::{Color, PlayerId};

/// Why a move (or pass) was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Player id is not one of the four seats.
    UnknownPlayer,
    /// Piece id is not 0-3.
    UnknownPiece,
    /// Another player holds the turn.
    NotYourTurn,
    /// The die has not been rolled.
    NoPendingRoll,
    /// Yard pieces only enter on a six.
    NeedSixToEnter,
    /// Passing is only allowed with no movable piece.
    MovesAvailable,
    /// The roll overshoots the finish and exact entry is required.
    ExactRollRequired,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::UnknownPlayer => "unknown player",
            Rejection::UnknownPiece => "unknown piece",
            Rejection::NotYourTurn => "not this player's turn",
            Rejection::NoPendingRoll => "no die roll pending",
            Rejection::NeedSixToEnter => "a six is needed to leave the yard",
            Rejection::MovesAvailable => "a piece can still move",
            Rejection::ExactRollRequired => "roll overshoots the finish",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("die already rolled: {face} is waiting to be played")]
    RollAlreadyPending { face: u8 },

    #[error("illegal move for {player}{}: {reason}", piece_suffix(.piece))]
    IllegalMove {
        player: PlayerId,
        /// `None` when passing the turn.
        piece: Option<PieceId>,
        reason: Rejection,
    },
}

fn piece_suffix(piece: &Option<PieceId>) -> String {
    piece.map(|p| format!(", {p}")).unwrap_or_default()
}

impl EngineError {
    pub(crate) fn illegal(player: PlayerId, piece: Option<PieceId>, reason: Rejection) -> Self {
        EngineError::IllegalMove {
            player,
            piece,
            reason,
        }
    }

    /// The rejection reason, for illegal moves.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EngineError::IllegalMove { reason, .. } => Some(*reason),
            EngineError::RollAlreadyPending { .. } => None,
        }
    }
}

/// A loaded `GameState` that no sequence of engine operations could produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("die value {0} is outside 0..=6")]
    DiceOutOfRange(u8),

    #[error("current player {0} has no seat")]
    UnknownCurrentPlayer(PlayerId),

    #[error("seat {seat} holds {found}")]
    SeatMismatch { seat: usize, found: PlayerId },

    #[error("seat {seat} has color {found}")]
    ColorMismatch { seat: usize, found: Color },

    #[error("{player} holds {found} in slot {slot}")]
    PieceMismatch {
        player: PlayerId,
        slot: usize,
        found: PieceId,
    },

    #[error("{0} is flagged as a winner with pieces still in play")]
    UnearnedWin(PlayerId),

    #[error("recorded winner {0} has not finished")]
    InvalidWinner(PlayerId),

    #[error("total_moves is {total_moves} but the log holds {logged} moves")]
    MoveCountMismatch { total_moves: u32, logged: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::RollAlreadyPending { face: 4 };
        assert_eq!(err.to_string(), "die already rolled: 4 is waiting to be played");

        let err =
            EngineError::illegal(PlayerId::new(1), Some(PieceId::new(2)), Rejection::NotYourTurn);
        assert_eq!(
            err.to_string(),
            "illegal move for Player 1, Piece 2: not this player's turn"
        );

        let err = EngineError::illegal(PlayerId::new(0), None, Rejection::MovesAvailable);
        assert_eq!(err.to_string(), "illegal move for Player 0: a piece can still move");
    }

    #[test]
    fn test_rejection_accessor() {
        let err = EngineError::illegal(PlayerId::new(0), None, Rejection::NoPendingRoll);
        assert_eq!(err.rejection(), Some(Rejection::NoPendingRoll));
        assert_eq!(EngineError::RollAlreadyPending { face: 6 }.rejection(), None);
    }

    #[test]
    fn test_state_error_messages() {
        assert_eq!(StateError::DiceOutOfRange(9).to_string(), "die value 9 is outside 0..=6");
        assert_eq!(
            StateError::UnknownCurrentPlayer(PlayerId::new(7)).to_string(),
            "current player Player 7 has no seat"
        );
        assert_eq!(
            StateError::MoveCountMismatch { total_moves: 3, logged: 1 }.to_string(),
            "total_moves is 3 but the log holds 1 moves"
        );
    }
}
