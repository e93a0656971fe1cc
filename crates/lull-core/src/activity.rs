//! The pre-sleep activity catalog for the note screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pre-sleep activity. Any subset may be selected per note.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Coffee,
    Nicotine,
    Alcohol,
    EatLate,
    Meditation,
}

impl Activity {
    /// All activities in display order. The grid renders this order.
    pub const ALL: [Activity; 5] = [
        Activity::Coffee,
        Activity::Nicotine,
        Activity::Alcohol,
        Activity::EatLate,
        Activity::Meditation,
    ];

    /// Display label shown under the tile.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Coffee => "Coffee",
            Activity::Nicotine => "Nicotine",
            Activity::Alcohol => "Alcohol",
            Activity::EatLate => "Eat Late",
            Activity::Meditation => "Meditation",
        }
    }

    /// Emoji glyph shown inside the tile.
    pub fn glyph(&self) -> &'static str {
        match self {
            Activity::Coffee => "☕",
            Activity::Nicotine => "🚬",
            Activity::Alcohol => "🍷",
            Activity::EatLate => "🍔",
            Activity::Meditation => "🧘",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_screen() {
        let labels: Vec<_> = Activity::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            ["Coffee", "Nicotine", "Alcohol", "Eat Late", "Meditation"]
        );
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Activity::EatLate).unwrap();
        assert_eq!(json, "\"eat_late\"");
    }
}
