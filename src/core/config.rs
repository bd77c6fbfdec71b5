//! Rules configuration.
//!
//! Two table rules are genuinely ambiguous in the classic game and are made
//! explicit here rather than hardcoded:
//! - `SafeCells`: whether pieces on the marked safe cells can be captured
//! - `HomeEntry`: whether a roll that overshoots the finish is clamped or refused
//!
//! The defaults reproduce the house rules the engine has always played by.

use serde::{Deserialize, Serialize};

/// Capture behaviour on the marked safe cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeCells {
    /// Safe cells are decorative; landing captures anywhere on the circuit.
    #[default]
    Ignored,
    /// Pieces standing on a safe cell cannot be captured.
    Immune,
}

/// Behaviour when a roll would carry a piece past the finishing square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeEntry {
    /// Stop on the finishing square; surplus pips are discarded.
    #[default]
    Clamp,
    /// The roll must land exactly on the finishing square.
    Exact,
}

/// Table rules for one game.
///
/// ```
/// use ludo_engine::core::{HomeEntry, RulesConfig, SafeCells};
///
/// let rules = RulesConfig::new().with_safe_cells(SafeCells::Immune).exact_home_entry();
/// assert_eq!(rules.safe_cells, SafeCells::Immune);
/// assert_eq!(rules.home_entry, HomeEntry::Exact);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Capture immunity on safe cells.
    #[serde(default)]
    pub safe_cells: SafeCells,

    /// Overshoot handling at the finish.
    #[serde(default)]
    pub home_entry: HomeEntry,
}

impl RulesConfig {
    /// Default house rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the safe-cell policy.
    #[must_use]
    pub fn with_safe_cells(mut self, policy: SafeCells) -> Self {
        self.safe_cells = policy;
        self
    }

    /// Set the home-entry policy.
    #[must_use]
    pub fn with_home_entry(mut self, policy: HomeEntry) -> Self {
        self.home_entry = policy;
        self
    }

    /// Require an exact roll to finish.
    #[must_use]
    pub fn exact_home_entry(self) -> Self {
        self.with_home_entry(HomeEntry::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_house_rules() {
        let rules = RulesConfig::default();
        assert_eq!(rules.safe_cells, SafeCells::Ignored);
        assert_eq!(rules.home_entry, HomeEntry::Clamp);
        assert_eq!(rules, RulesConfig::new());
    }

    #[test]
    fn test_builder() {
        let rules = RulesConfig::new()
            .with_safe_cells(SafeCells::Immune)
            .with_home_entry(HomeEntry::Exact);

        assert_eq!(rules.safe_cells, SafeCells::Immune);
        assert_eq!(rules.home_entry, HomeEntry::Exact);
    }

    #[test]
    fn test_serde_names_and_defaults() {
        let rules = RulesConfig::new().with_safe_cells(SafeCells::Immune);
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"{"safe_cells":"immune","home_entry":"clamp"}"#);

        let partial: RulesConfig = serde_json::from_str(r#"{"home_entry":"exact"}"#).unwrap();
        assert_eq!(partial.safe_cells, SafeCells::Ignored);
        assert_eq!(partial.home_entry, HomeEntry::Exact);
    }
}
