//! Challenge records attached to a game by the lobby.
//!
//! A challenge is opaque to the rules: the engine stores whatever the lobby
//! attached and hands it back unchanged. Entry fees and payouts are display
//! data only.

use serde::{Deserialize, Serialize};

/// Lobby difficulty label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A selectable challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub entry_fee: f64,
    pub winning_amount: f64,
    pub currency: String,
    /// Seats already taken.
    pub participants: u32,
    pub max_participants: u32,
    pub difficulty: Difficulty,
}

impl Challenge {
    /// Create a challenge with no seats taken.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entry_fee: f64,
        winning_amount: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entry_fee,
            winning_amount,
            currency: "₹".to_string(),
            participants: 0,
            max_participants: 4,
            difficulty,
        }
    }

    /// Set the number of seats already taken.
    #[must_use]
    pub fn with_participants(mut self, participants: u32) -> Self {
        self.participants = participants;
        self
    }

    /// Set the display currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.entry_fee == 0.0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }

    /// Seats still open.
    #[must_use]
    pub fn open_seats(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }
}

/// The built-in challenge list, cheapest first.
#[must_use]
pub fn catalog() -> Vec<Challenge> {
    use Difficulty::*;

    vec![
        Challenge::new("challenge-free", "Free Play", 0.0, 0.0, Easy).with_participants(1),
        Challenge::new("challenge-1", "Beginner Challenge", 1.0, 1.8, Easy).with_participants(2),
        Challenge::new("challenge-5", "Casual Match", 5.0, 9.0, Easy).with_participants(3),
        Challenge::new("challenge-10", "Classic Battle", 10.0, 18.0, Medium).with_participants(1),
        Challenge::new("challenge-25", "Pro Tournament", 25.0, 45.0, Medium).with_participants(2),
        Challenge::new("challenge-50", "Expert League", 50.0, 90.0, Hard).with_participants(1),
        Challenge::new("challenge-100", "Championship", 100.0, 180.0, Hard),
    ]
}

/// Look up a built-in challenge by id.
#[must_use]
pub fn find(id: &str) -> Option<Challenge> {
    catalog().into_iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let all = catalog();
        assert_eq!(all.len(), 7);
        assert!(all[0].is_free());
        assert!(all.windows(2).all(|w| w[0].entry_fee < w[1].entry_fee));
        assert!(all.iter().all(|c| c.max_participants == 4 && c.currency == "₹"));
    }

    #[test]
    fn test_find() {
        let pro = find("challenge-25").unwrap();
        assert_eq!(pro.name, "Pro Tournament");
        assert_eq!(pro.difficulty, Difficulty::Medium);
        assert_eq!(pro.open_seats(), 2);

        assert!(find("challenge-9000").is_none());
    }

    #[test]
    fn test_full() {
        let c = Challenge::new("x", "X", 1.0, 2.0, Difficulty::Hard).with_participants(4);
        assert!(c.is_full());
        assert_eq!(c.open_seats(), 0);

        let c = c.with_participants(7);
        assert_eq!(c.open_seats(), 0);
    }

    #[test]
    fn test_serialization() {
        let c = find("challenge-1").unwrap().with_currency("$");
        let json = serde_json::to_string(&c).unwrap();
        let back: Challenge = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
