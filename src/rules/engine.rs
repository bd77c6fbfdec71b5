//! The game engine: roll, move, pass, reset.
//!
//! Every operation reads a `&GameState` and returns a new state. A rejected
//! operation returns an `EngineError` and the caller's state is untouched.
//!
//! ## Move order
//!
//! 1. Compute the destination (entry cell from the yard, else `from + die`,
//!    with the home-entry policy applied past the finish).
//! 2. Send opposing pieces on the destination circuit cell back to the yard.
//! 3. Log the move and bump the move counter.
//! 4. Record a win if all four of the mover's pieces are finished.
//! 5. Keep the turn on a six, otherwise pass to the next seat.
//! 6. Clear the die.

use smallvec::SmallVec;

use super::movement::{capture_victims, destination};
use crate::core::{
    Clock, DieSource, EngineError, GameMove, GameRng, GameState, HomeEntry, PieceId, PlayerId,
    Position, Rejection, RulesConfig, SafeCells, SystemClock, DIE_FACES, SIX,
};

/// Rules engine bound to a die and a clock.
#[derive(Clone, Debug)]
pub struct Engine<D = GameRng, C = SystemClock> {
    rules: RulesConfig,
    dice: D,
    clock: C,
}

impl Engine {
    /// House rules, seeded die, system clock.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        EngineBuilder::new().seed(seed).build()
    }
}

impl<D: DieSource, C: Clock> Engine<D, C> {
    #[must_use]
    pub fn new(rules: RulesConfig, dice: D, clock: C) -> Self {
        Self { rules, dice, clock }
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Roll the die for the current player.
    ///
    /// Fails with `RollAlreadyPending` while an earlier roll waits to be
    /// played. Marks the game as started. A face outside `1..=6` from the
    /// die source is clamped into range.
    pub fn roll_die(&mut self, state: &GameState) -> Result<(GameState, u8), EngineError> {
        if let Some(face) = state.pending_roll() {
            tracing::trace!(player = %state.current_player, face, "roll ignored, die pending");
            return Err(EngineError::RollAlreadyPending { face });
        }

        let rolled = self.dice.roll();
        let face = rolled.clamp(1, DIE_FACES);
        if face != rolled {
            tracing::warn!(
                player = %state.current_player,
                rolled,
                face,
                "die face out of range, clamped"
            );
        }

        let mut next = state.clone();
        next.dice_value = face;
        next.game_started = true;

        tracing::debug!(player = %state.current_player, face, "rolled");
        Ok((next, face))
    }

    /// Whether `piece` of `player` may move with the pending roll.
    #[must_use]
    pub fn can_move(&self, state: &GameState, player: PlayerId, piece: PieceId) -> bool {
        self.check_move(state, player, piece).is_ok()
    }

    /// The current player's pieces that may move with the pending roll.
    #[must_use]
    pub fn movable_pieces(&self, state: &GameState) -> SmallVec<[PieceId; 4]> {
        let player = state.current_player;
        PieceId::all()
            .filter(|&piece| self.can_move(state, player, piece))
            .collect()
    }

    /// Move a piece with the pending roll.
    pub fn move_piece(
        &self,
        state: &GameState,
        player: PlayerId,
        piece: PieceId,
    ) -> Result<GameState, EngineError> {
        let to = self.check_move(state, player, piece).map_err(|reason| {
            tracing::trace!(%player, %piece, %reason, "move rejected");
            EngineError::illegal(player, Some(piece), reason)
        })?;

        let die = state.dice_value;
        let from = state.players[player.index()][piece].position;
        let victims = capture_victims(state, player, to, &self.rules);

        let mut next = state.clone();

        for victim in &victims {
            next.players[victim.player.index()][victim.piece].position = Position::YARD;
        }
        if !victims.is_empty() {
            tracing::info!(%player, %piece, cell = %to, captured = victims.len(), "capture");
        }

        next.players[player.index()][piece].position = to;

        next.history.push_back(
            GameMove::new(player, piece, from, to, die, self.clock.now_ms())
                .with_captures(&victims),
        );
        next.total_moves += 1;

        let mover = &mut next.players[player.index()];
        if mover.all_finished() && !mover.is_winner {
            mover.is_winner = true;
            if next.winner.is_none() {
                next.winner = Some(player);
            }
            tracing::info!(%player, color = %mover.color, "all pieces home");
        }

        next.current_player = next_player(player, die);
        next.dice_value = 0;

        tracing::debug!(%player, %piece, %from, %to, die, "moved");
        Ok(next)
    }

    /// Give up the pending roll when no piece can use it.
    ///
    /// Not logged as a move. The turn follows the usual rule: a six keeps it.
    pub fn pass_turn(&self, state: &GameState) -> Result<GameState, EngineError> {
        let player = state.current_player;

        let Some(die) = state.pending_roll() else {
            return Err(EngineError::illegal(player, None, Rejection::NoPendingRoll));
        };
        if !self.movable_pieces(state).is_empty() {
            return Err(EngineError::illegal(player, None, Rejection::MovesAvailable));
        }

        let mut next = state.clone();
        next.current_player = next_player(player, die);
        next.dice_value = 0;

        tracing::debug!(%player, die, "passed");
        Ok(next)
    }

    /// A fresh table. Identical whatever came before.
    #[must_use]
    pub fn reset_game(&self) -> GameState {
        tracing::debug!("reset");
        GameState::new()
    }

    /// Validate a move and compute its destination.
    fn check_move(
        &self,
        state: &GameState,
        player: PlayerId,
        piece: PieceId,
    ) -> Result<Position, Rejection> {
        let owner = state.player(player).ok_or(Rejection::UnknownPlayer)?;
        let from = owner.piece(piece).ok_or(Rejection::UnknownPiece)?.position;

        if player != state.current_player {
            return Err(Rejection::NotYourTurn);
        }
        let die = state.pending_roll().ok_or(Rejection::NoPendingRoll)?;

        if from.is_yard() && die != SIX {
            return Err(Rejection::NeedSixToEnter);
        }

        destination(player, from, die, self.rules.home_entry).ok_or(Rejection::ExactRollRequired)
    }
}

/// Seat to act after `player` consumed `die`.
fn next_player(player: PlayerId, die: u8) -> PlayerId {
    if die == SIX {
        player
    } else {
        player.next()
    }
}

/// Builder for an [`Engine`].
///
/// ```
/// use ludo_engine::core::{GameState, SafeCells};
/// use ludo_engine::rules::EngineBuilder;
///
/// let mut engine = EngineBuilder::new().seed(7).safe_cells(SafeCells::Immune).build();
/// let (state, face) = engine.roll_die(&GameState::new()).unwrap();
/// assert_eq!(state.dice_value(), face);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    rules: RulesConfig,
    seed: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole rules configuration.
    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn safe_cells(mut self, policy: SafeCells) -> Self {
        self.rules.safe_cells = policy;
        self
    }

    pub fn home_entry(mut self, policy: HomeEntry) -> Self {
        self.rules.home_entry = policy;
        self
    }

    /// Seed the die. Without a seed the die is seeded from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build with a ChaCha8 die and the system clock.
    pub fn build(self) -> Engine {
        let dice = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Engine::new(self.rules, dice, SystemClock)
    }

    /// Build with a custom die and clock.
    pub fn build_with<D: DieSource, C: Clock>(self, dice: D, clock: C) -> Engine<D, C> {
        Engine::new(self.rules, dice, clock)
    }
}
