//! Position arithmetic and capture resolution.
//!
//! Pure functions of a state and a candidate move; the engine composes them.

use smallvec::SmallVec;

use crate::board::{self, is_safe_cell};
use crate::core::{
    GameState, HomeEntry, PieceRef, PlayerId, Position, RulesConfig, SafeCells, Square, SIX,
};

/// Where a piece at `from` lands with `die`, or `None` if it cannot move.
///
/// - Yard pieces enter at the owner's entry cell, and only on a six.
/// - Everything else advances by the die. Sums of 52 and above address the
///   final stretch directly (52 is its first cell, 57 the finish).
/// - Past 57 the roll is clamped to the finish under `HomeEntry::Clamp` and
///   refused under `HomeEntry::Exact`.
#[must_use]
pub fn destination(
    player: PlayerId,
    from: Position,
    die: u8,
    home_entry: HomeEntry,
) -> Option<Position> {
    if from.square() == Square::Yard {
        return if die == SIX {
            Position::on_circuit(player.entry_cell())
        } else {
            None
        };
    }

    let raw = from.raw() + i32::from(die);
    match Position::new(raw) {
        Some(pos) => Some(pos),
        None => match home_entry {
            HomeEntry::Clamp => Some(Position::FINISHED),
            HomeEntry::Exact => None,
        },
    }
}

/// Opposing pieces sent home when `mover` lands on `to`.
///
/// Only circuit cells capture; stretch cells are private and the finish is
/// shared by nobody. Every opposing piece on the cell is taken. Under
/// `SafeCells::Immune` nothing standing on a safe cell is taken.
#[must_use]
pub fn capture_victims(
    state: &GameState,
    mover: PlayerId,
    to: Position,
    rules: &RulesConfig,
) -> SmallVec<[PieceRef; 4]> {
    let Some(cell) = to.circuit_cell() else {
        return SmallVec::new();
    };

    if rules.safe_cells == SafeCells::Immune && is_safe_cell(cell) {
        return SmallVec::new();
    }

    board::occupancy(state)
        .remove(&cell)
        .unwrap_or_default()
        .into_iter()
        .filter(|victim| victim.player != mover)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceId;

    fn pos(raw: i32) -> Position {
        Position::new(raw).unwrap()
    }

    #[test]
    fn test_yard_needs_six() {
        let p2 = PlayerId::new(2);
        for die in 1..=5 {
            assert_eq!(destination(p2, Position::YARD, die, HomeEntry::Clamp), None);
        }
        assert_eq!(destination(p2, Position::YARD, 6, HomeEntry::Clamp), Some(pos(26)));
    }

    #[test]
    fn test_plain_advance() {
        let p0 = PlayerId::new(0);
        assert_eq!(destination(p0, pos(0), 3, HomeEntry::Clamp), Some(pos(3)));
        assert_eq!(destination(p0, pos(45), 6, HomeEntry::Clamp), Some(pos(51)));
    }

    #[test]
    fn test_crossing_into_stretch() {
        let p0 = PlayerId::new(0);
        assert_eq!(destination(p0, pos(51), 1, HomeEntry::Clamp), Some(pos(52)));
        assert_eq!(destination(p0, pos(50), 4, HomeEntry::Clamp), Some(pos(54)));
        assert_eq!(destination(p0, pos(52), 5, HomeEntry::Clamp), Some(pos(57)));
    }

    #[test]
    fn test_overshoot_clamps() {
        let p0 = PlayerId::new(0);
        assert_eq!(destination(p0, pos(55), 6, HomeEntry::Clamp), Some(Position::FINISHED));
        assert_eq!(
            destination(p0, Position::FINISHED, 3, HomeEntry::Clamp),
            Some(Position::FINISHED)
        );
    }

    #[test]
    fn test_overshoot_refused_when_exact() {
        let p0 = PlayerId::new(0);
        assert_eq!(destination(p0, pos(55), 6, HomeEntry::Exact), None);
        assert_eq!(destination(p0, pos(55), 2, HomeEntry::Exact), Some(Position::FINISHED));
        assert_eq!(destination(p0, Position::FINISHED, 1, HomeEntry::Exact), None);
    }

    #[test]
    fn test_victims_on_circuit() {
        let state = GameState::new()
            .with_piece_at(PlayerId::new(1), PieceId::new(0), pos(20))
            .with_piece_at(PlayerId::new(2), PieceId::new(1), pos(20))
            .with_piece_at(PlayerId::new(0), PieceId::new(3), pos(20));

        let victims = capture_victims(&state, PlayerId::new(0), pos(20), &RulesConfig::default());

        assert_eq!(
            victims.as_slice(),
            &[
                PieceRef::new(PlayerId::new(1), PieceId::new(0)),
                PieceRef::new(PlayerId::new(2), PieceId::new(1)),
            ]
        );
    }

    #[test]
    fn test_no_victims_off_circuit() {
        let state = GameState::new()
            .with_piece_at(PlayerId::new(1), PieceId::new(0), pos(54))
            .with_piece_at(PlayerId::new(1), PieceId::new(1), Position::FINISHED);

        let rules = RulesConfig::default();
        assert!(capture_victims(&state, PlayerId::new(0), pos(54), &rules).is_empty());
        assert!(capture_victims(&state, PlayerId::new(0), Position::FINISHED, &rules).is_empty());
    }

    #[test]
    fn test_safe_cell_policy() {
        let state = GameState::new().with_piece_at(PlayerId::new(1), PieceId::new(0), pos(8));

        let ignored = RulesConfig::default();
        let immune = RulesConfig::new().with_safe_cells(SafeCells::Immune);

        assert_eq!(capture_victims(&state, PlayerId::new(0), pos(8), &ignored).len(), 1);
        assert!(capture_victims(&state, PlayerId::new(0), pos(8), &immune).is_empty());
    }
}
