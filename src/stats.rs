//! Read-only projections over a game state for scoreboards.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, Square, PLAYER_COUNT, SIX};

/// Summary of the move log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Time from the first logged move to the last, in milliseconds.
    pub duration_ms: u64,
    pub total_moves: u32,
    /// Logged moves per seat.
    pub moves_per_player: [u32; PLAYER_COUNT],
    /// Mean die face over logged moves, `0.0` for an empty log.
    pub average_roll: f64,
    /// Logged moves that used a six.
    pub lucky_rolls: u32,
}

impl GameStats {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let history = state.history();

        let duration_ms = match (history.front(), history.back()) {
            (Some(first), Some(last)) => last.timestamp.saturating_sub(first.timestamp),
            _ => 0,
        };

        let mut moves_per_player = [0u32; PLAYER_COUNT];
        let mut pip_total = 0u64;
        let mut lucky_rolls = 0u32;
        for record in history {
            if let Some(count) = moves_per_player.get_mut(record.player.index()) {
                *count += 1;
            }
            pip_total += u64::from(record.dice_value);
            if record.dice_value == SIX {
                lucky_rolls += 1;
            }
        }

        let average_roll = if history.is_empty() {
            0.0
        } else {
            pip_total as f64 / history.len() as f64
        };

        Self {
            duration_ms,
            total_moves: state.total_moves(),
            moves_per_player,
            average_roll,
            lucky_rolls,
        }
    }

    /// Duration as `m:ss`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        format_duration(self.duration_ms)
    }

    /// Average roll to one decimal place.
    #[must_use]
    pub fn average_roll_display(&self) -> String {
        format!("{:.1}", self.average_roll)
    }
}

/// Format milliseconds as `m:ss`, truncating partial seconds.
///
/// ```
/// use ludo_engine::stats::format_duration;
///
/// assert_eq!(format_duration(0), "0:00");
/// assert_eq!(format_duration(65_400), "1:05");
/// ```
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1_000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Where one seat's pieces are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts {
    pub at_home: u8,
    pub on_board: u8,
    pub in_final_stretch: u8,
    pub finished: u8,
}

impl PieceCounts {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        let mut counts = Self::default();
        for piece in &player.pieces {
            match piece.position.square() {
                Square::Yard => counts.at_home += 1,
                Square::Circuit(_) => counts.on_board += 1,
                Square::Stretch(_) => counts.in_final_stretch += 1,
                Square::Finished => counts.finished += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, PieceId, PlayerId, Position, ScriptedDice};
    use crate::rules::EngineBuilder;

    #[test]
    fn test_empty_log() {
        let stats = GameStats::from_state(&GameState::new());

        assert_eq!(stats.duration_ms, 0);
        assert_eq!(stats.total_moves, 0);
        assert_eq!(stats.moves_per_player, [0; 4]);
        assert_eq!(stats.average_roll, 0.0);
        assert_eq!(stats.lucky_rolls, 0);
        assert_eq!(stats.duration_display(), "0:00");
        assert_eq!(stats.average_roll_display(), "0.0");
    }

    #[test]
    fn test_stats_over_played_moves() {
        // Red enters on a six then moves two; blue enters then moves four.
        let mut engine = EngineBuilder::new()
            .build_with(ScriptedDice::new([6, 2, 6, 4]), ManualClock::new(1_000, 30_000));
        let red = PlayerId::new(0);
        let blue = PlayerId::new(1);
        let p0 = PieceId::new(0);

        let mut state = GameState::new();
        for player in [red, red, blue, blue] {
            let (rolled, _) = engine.roll_die(&state).unwrap();
            state = engine.move_piece(&rolled, player, p0).unwrap();
        }

        let stats = GameStats::from_state(&state);

        assert_eq!(stats.total_moves, 4);
        assert_eq!(stats.moves_per_player, [2, 2, 0, 0]);
        assert_eq!(stats.lucky_rolls, 2);
        assert_eq!(stats.average_roll, 4.5);
        assert_eq!(stats.duration_ms, 90_000);
        assert_eq!(stats.duration_display(), "1:30");
        assert_eq!(stats.average_roll_display(), "4.5");
    }

    #[test]
    fn test_average_roll_display_rounds() {
        let stats = GameStats {
            duration_ms: 0,
            total_moves: 3,
            moves_per_player: [3, 0, 0, 0],
            average_roll: 11.0 / 3.0,
            lucky_rolls: 0,
        };
        assert_eq!(stats.average_roll_display(), "3.7");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(999), "0:00");
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(600_000), "10:00");
    }

    #[test]
    fn test_piece_counts() {
        let pos = |raw| Position::new(raw).unwrap();
        let red = PlayerId::new(0);
        let state = GameState::new()
            .with_piece_at(red, PieceId::new(0), pos(51))
            .with_piece_at(red, PieceId::new(1), pos(52))
            .with_piece_at(red, PieceId::new(2), Position::FINISHED);

        let counts = PieceCounts::of(state.player(red).unwrap());

        assert_eq!(
            counts,
            PieceCounts {
                at_home: 1,
                on_board: 1,
                in_final_stretch: 1,
                finished: 1,
            }
        );
    }
}
