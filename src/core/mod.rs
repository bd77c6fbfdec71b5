//! Core types: players, pieces, positions, state, move log, dice, clock,
//! configuration, errors.
//!
//! Everything here is rule-free data. The rules live in `crate::rules`.

pub mod player;
pub mod piece;
pub mod rng;
pub mod clock;
pub mod config;
pub mod history;
pub mod state;
pub mod error;

pub use player::{Color, Player, PlayerId, PLAYER_COUNT};
pub use piece::{Piece, PieceId, Position, Square, PIECES_PER_PLAYER};
pub use rng::{DieSource, GameRng, GameRngState, ScriptedDice, DIE_FACES, SIX};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{HomeEntry, RulesConfig, SafeCells};
pub use history::{GameMove, PieceRef};
pub use state::GameState;
pub use error::{EngineError, Rejection, StateError};
