//! The feeling catalog for the note screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user feels right now. At most one feeling is selected per note.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Feeling {
    Stress,
    Happy,
    Calm,
    Tired,
    Anxious,
    Neutral,
}

impl Feeling {
    /// All feelings in display order. The grid renders this order.
    pub const ALL: [Feeling; 6] = [
        Feeling::Stress,
        Feeling::Happy,
        Feeling::Calm,
        Feeling::Tired,
        Feeling::Anxious,
        Feeling::Neutral,
    ];

    /// Display label shown under the tile.
    pub fn label(&self) -> &'static str {
        match self {
            Feeling::Stress => "Stress",
            Feeling::Happy => "Happy",
            Feeling::Calm => "Calm",
            Feeling::Tired => "Tired",
            Feeling::Anxious => "Anxious",
            Feeling::Neutral => "Neutral",
        }
    }

    /// Emoji glyph shown inside the tile.
    pub fn glyph(&self) -> &'static str {
        match self {
            Feeling::Stress => "😣",
            Feeling::Happy => "😊",
            Feeling::Calm => "😌",
            Feeling::Tired => "😴",
            Feeling::Anxious => "😟",
            Feeling::Neutral => "😐",
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_screen() {
        let labels: Vec<_> = Feeling::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            ["Stress", "Happy", "Calm", "Tired", "Anxious", "Neutral"]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Feeling::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
        let back: Feeling = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Feeling::Neutral);
    }

    #[test]
    fn test_every_feeling_has_a_glyph() {
        for feeling in Feeling::ALL {
            assert!(!feeling.glyph().is_empty());
        }
    }
}
