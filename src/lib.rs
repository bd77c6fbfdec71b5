//! # ludo-engine
//!
//! Rules engine for four-player Ludo: movement, captures, turn rotation and
//! win detection, driven by a single six-sided die.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: every operation reads a `&GameState` and
//!    returns a new one. A rejected operation leaves the caller's state as it
//!    was and reports why.
//!
//! 2. **Injected chance**: the die is a `DieSource` and move timestamps come
//!    from a `Clock`, so whole games replay deterministically.
//!
//! 3. **Explicit house rules**: safe-cell immunity and exact home entry are
//!    `RulesConfig` choices, not hidden behaviour.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{GameState, PlayerId};
//! use ludo_engine::rules::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new().seed(3).build();
//! let state = GameState::new();
//!
//! let (rolled, face) = engine.roll_die(&state).unwrap();
//! let next = match engine.movable_pieces(&rolled).first() {
//!     Some(&piece) => engine.move_piece(&rolled, PlayerId::new(0), piece).unwrap(),
//!     None => engine.pass_turn(&rolled).unwrap(),
//! };
//!
//! assert_eq!(next.dice_value(), 0);
//! assert_eq!(next.current_player() == PlayerId::new(0), face == 6);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, pieces, positions, state, move log, dice, clock, config, errors
//! - `rules`: the engine and its movement/capture rules
//! - `board`: layout constants, occupancy, display coordinates
//! - `stats`: scoreboard projections over the move log
//! - `challenge`: lobby challenge records, opaque to the rules

pub mod core;
pub mod board;
pub mod rules;
pub mod stats;
pub mod challenge;

// Re-export commonly used types
pub use crate::core::{
    Color, Player, PlayerId, PLAYER_COUNT,
    Piece, PieceId, Position, Square,
    DieSource, GameRng, GameRngState, ScriptedDice,
    Clock, ManualClock, SystemClock,
    RulesConfig, SafeCells, HomeEntry,
    GameMove, PieceRef, GameState,
    EngineError, Rejection, StateError,
};

pub use crate::board::{locate, Coord};

pub use crate::rules::{Engine, EngineBuilder};

pub use crate::stats::{GameStats, PieceCounts};

pub use crate::challenge::{Challenge, Difficulty};
