//! Game state: the single source of truth for one table.
//!
//! A `GameState` is a value. Engine operations take `&GameState` and return a
//! fresh one; nothing reachable from an old state changes afterwards. The
//! fixed-size player and piece arrays are copied on clone and the move log is
//! an `im::Vector`, so cloning is cheap and never aliases mutable data.
//!
//! ## Dice encoding
//!
//! `dice_value` is `0` while no roll is pending and `1..=6` while a rolled
//! face waits to be played.
//!
//! ## Loading
//!
//! Deserialization goes through [`GameState::validate`]; a state that breaks
//! an engine invariant is refused with a [`StateError`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::history::GameMove;
use super::piece::{PieceId, Position};
use super::player::{Player, PlayerId, PLAYER_COUNT};
use super::rng::DIE_FACES;
use crate::challenge::Challenge;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Whose turn it is.
    pub(crate) current_player: PlayerId,

    /// Seats in turn order.
    pub(crate) players: [Player; PLAYER_COUNT],

    /// Pending die face, `0` when none.
    pub(crate) dice_value: u8,

    pub(crate) game_started: bool,

    /// First player to finish all four pieces.
    pub(crate) winner: Option<PlayerId>,

    /// Moves applied since the game began.
    pub(crate) total_moves: u32,

    /// Append-only move log.
    pub(crate) history: Vector<GameMove>,

    /// Lobby challenge, opaque to the rules.
    pub(crate) selected_challenge: Option<Challenge>,
}

/// Unchecked wire form of a `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    current_player: PlayerId,
    players: [Player; PLAYER_COUNT],
    dice_value: u8,
    game_started: bool,
    winner: Option<PlayerId>,
    total_moves: u32,
    history: Vector<GameMove>,
    selected_challenge: Option<Challenge>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            current_player: raw.current_player,
            players: raw.players,
            dice_value: raw.dice_value,
            game_started: raw.game_started,
            winner: raw.winner,
            total_moves: raw.total_moves,
            history: raw.history,
            selected_challenge: raw.selected_challenge,
        };
        state.validate()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh table: every piece in the yard, red to roll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_player: PlayerId::new(0),
            players: std::array::from_fn(|i| Player::new(PlayerId::new(i as u8))),
            dice_value: 0,
            game_started: false,
            winner: None,
            total_moves: 0,
            history: Vector::new(),
            selected_challenge: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// All seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// A seat by ID, or `None` for an unknown ID.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Position of one piece, or `None` for unknown IDs.
    #[must_use]
    pub fn position(&self, player: PlayerId, piece: PieceId) -> Option<Position> {
        self.player(player)?.piece(piece).map(|p| p.position)
    }

    /// Pending die face, `0` when none.
    #[must_use]
    pub fn dice_value(&self) -> u8 {
        self.dice_value
    }

    /// Pending die face, if rolled and not yet played.
    #[must_use]
    pub fn pending_roll(&self) -> Option<u8> {
        (self.dice_value != 0).then_some(self.dice_value)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.game_started
    }

    /// The recorded winner.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once a winner is recorded. Play may still continue.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// The move log, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameMove> {
        &self.history
    }

    #[must_use]
    pub fn selected_challenge(&self) -> Option<&Challenge> {
        self.selected_challenge.as_ref()
    }

    /// Check the invariants the engine relies on.
    ///
    /// Every state reachable through engine operations passes. Arranged
    /// states pass unless a winner's pieces were moved off the finish.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.dice_value > DIE_FACES {
            return Err(StateError::DiceOutOfRange(self.dice_value));
        }
        if !self.current_player.is_valid() {
            return Err(StateError::UnknownCurrentPlayer(self.current_player));
        }

        for (seat, player) in self.players.iter().enumerate() {
            if player.id.index() != seat {
                return Err(StateError::SeatMismatch { seat, found: player.id });
            }
            if player.color != player.id.color() {
                return Err(StateError::ColorMismatch { seat, found: player.color });
            }
            for (slot, piece) in player.pieces.iter().enumerate() {
                if piece.id.index() != slot {
                    return Err(StateError::PieceMismatch {
                        player: player.id,
                        slot,
                        found: piece.id,
                    });
                }
            }
            if player.is_winner && !player.all_finished() {
                return Err(StateError::UnearnedWin(player.id));
            }
        }

        if let Some(winner) = self.winner {
            if !self.player(winner).is_some_and(|p| p.is_winner) {
                return Err(StateError::InvalidWinner(winner));
            }
        }

        if self.total_moves as usize != self.history.len() {
            return Err(StateError::MoveCountMismatch {
                total_moves: self.total_moves,
                logged: self.history.len(),
            });
        }

        Ok(())
    }

    // === Non-rule transitions ===

    /// Mark the game as started without rolling.
    #[must_use]
    pub fn start(&self) -> Self {
        Self {
            game_started: true,
            ..self.clone()
        }
    }

    /// Attach a lobby challenge.
    #[must_use]
    pub fn with_challenge(&self, challenge: Challenge) -> Self {
        Self {
            selected_challenge: Some(challenge),
            ..self.clone()
        }
    }

    /// Detach any lobby challenge.
    #[must_use]
    pub fn without_challenge(&self) -> Self {
        Self {
            selected_challenge: None,
            ..self.clone()
        }
    }

    // === Arrangement ===
    //
    // Setup helpers for puzzles, replays and tests. They place pieces
    // directly and apply no rules (no captures, no win check, no log).

    /// Place a piece. Unknown IDs leave the state unchanged.
    #[must_use]
    pub fn with_piece_at(&self, player: PlayerId, piece: PieceId, position: Position) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next
            .players
            .get_mut(player.index())
            .and_then(|p| p.pieces.get_mut(piece.index()))
        {
            slot.position = position;
        }
        next
    }

    /// Hand the turn to a seat. Unknown IDs leave the state unchanged.
    #[must_use]
    pub fn with_current_player(&self, player: PlayerId) -> Self {
        let mut next = self.clone();
        if player.is_valid() {
            next.current_player = player;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.dice_value(), 0);
        assert_eq!(state.pending_roll(), None);
        assert!(!state.is_started());
        assert!(state.winner().is_none());
        assert!(!state.is_over());
        assert_eq!(state.total_moves(), 0);
        assert!(state.history().is_empty());
        assert!(state.selected_challenge().is_none());

        for (i, player) in state.players().iter().enumerate() {
            assert_eq!(player.id, PlayerId::new(i as u8));
            assert!(player.pieces.iter().all(|p| p.position == Position::YARD));
        }
    }

    #[test]
    fn test_with_piece_at_is_non_destructive() {
        let before = GameState::new();
        let pos = Position::new(20).unwrap();

        let after = before.with_piece_at(PlayerId::new(2), PieceId::new(3), pos);

        assert_eq!(after.position(PlayerId::new(2), PieceId::new(3)), Some(pos));
        assert_eq!(before.position(PlayerId::new(2), PieceId::new(3)), Some(Position::YARD));
    }

    #[test]
    fn test_with_piece_at_ignores_unknown_ids() {
        let state = GameState::new();
        let pos = Position::new(5).unwrap();

        assert_eq!(state.with_piece_at(PlayerId::new(9), PieceId::new(0), pos), state);
        assert_eq!(state.with_piece_at(PlayerId::new(0), PieceId::new(9), pos), state);
        assert_eq!(state.position(PlayerId::new(9), PieceId::new(0)), None);
    }

    #[test]
    fn test_with_current_player() {
        let state = GameState::new().with_current_player(PlayerId::new(3));
        assert_eq!(state.current_player(), PlayerId::new(3));

        let same = state.with_current_player(PlayerId::new(4));
        assert_eq!(same.current_player(), PlayerId::new(3));
    }

    #[test]
    fn test_start_and_challenge() {
        let free = challenge::find("challenge-free").unwrap();
        let state = GameState::new().with_challenge(free.clone()).start();

        assert!(state.is_started());
        assert_eq!(state.selected_challenge(), Some(&free));
        assert!(state.without_challenge().selected_challenge().is_none());
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = GameState::new()
            .with_piece_at(PlayerId::new(1), PieceId::new(0), Position::new(30).unwrap())
            .with_challenge(challenge::find("challenge-5").unwrap());

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }

    /// Serialize a fresh state, apply `edit` to the JSON, and load it back.
    fn load_edited(edit: impl FnOnce(&mut serde_json::Value)) -> Result<GameState, String> {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        edit(&mut json);
        serde_json::from_value(json).map_err(|e| e.to_string())
    }

    #[test]
    fn test_load_accepts_pending_roll() {
        let state = load_edited(|json| json["dice_value"] = serde_json::json!(6)).unwrap();
        assert_eq!(state.pending_roll(), Some(6));
    }

    #[test]
    fn test_load_rejects_broken_fields() {
        let cases: [(&str, fn(&mut serde_json::Value)); 8] = [
            ("die value 200", |j| j["dice_value"] = serde_json::json!(200)),
            ("current player Player 255", |j| j["current_player"] = serde_json::json!(255)),
            ("seat 1 holds Player 2", |j| j["players"][1]["id"] = serde_json::json!(2)),
            ("seat 0 has color blue", |j| j["players"][0]["color"] = serde_json::json!("blue")),
            ("in slot 3", |j| j["players"][2]["pieces"][3]["id"] = serde_json::json!(0)),
            ("Player 0 is flagged as a winner", |j| {
                j["players"][0]["is_winner"] = serde_json::json!(true)
            }),
            ("recorded winner Player 1", |j| j["winner"] = serde_json::json!(1)),
            ("total_moves is 3", |j| j["total_moves"] = serde_json::json!(3)),
        ];

        for (expected, edit) in cases {
            let err = load_edited(edit).unwrap_err();
            assert!(err.contains(expected), "{err:?} should mention {expected:?}");
        }
    }

    #[test]
    fn test_load_rejects_unknown_winner_seat() {
        let err = load_edited(|json| json["winner"] = serde_json::json!(9)).unwrap_err();
        assert!(err.contains("recorded winner Player 9"), "{err}");
    }

    #[test]
    fn test_validate_accepts_finished_winner() {
        let mut state = GameState::new();
        for piece in PieceId::all() {
            state = state.with_piece_at(PlayerId::new(2), piece, Position::FINISHED);
        }
        state.players[2].is_winner = true;
        state.winner = Some(PlayerId::new(2));

        assert_eq!(state.validate(), Ok(()));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);
    }
}
