use std::{fmt::{self, Display}, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// The two sides. White moves towards higher point indices, black towards lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot used for per-color storage such as the bar.
    pub(crate) fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Points that make up this color's home quadrant.
    pub fn home_range(&self) -> RangeInclusive<u8> {
        match self {
            Color::White => 18..=23,
            Color::Black => 0..=5,
        }
    }

    /// Point a checker enters on from the bar with the given die.
    /// White: 1 -> 23 ... 6 -> 18. Black: 1 -> 0 ... 6 -> 5.
    pub fn entry_point(&self, die: u8) -> u8 {
        match self {
            Color::White => 24 - die,
            Color::Black => die - 1,
        }
    }

    /// Exact pip count needed to bear a checker off from `index`.
    pub fn bear_off_distance(&self, index: u8) -> u8 {
        match self {
            Color::White => 24 - index,
            Color::Black => index + 1,
        }
    }

    /// Signed distance travelled from `start` to `end`. Positive means forward.
    pub fn distance(&self, start: u8, end: u8) -> i16 {
        match self {
            Color::White => end as i16 - start as i16,
            Color::Black => start as i16 - end as i16,
        }
    }

    /// Whether point `other` lies past `index` in this color's direction of travel.
    pub fn is_ahead_of(&self, other: u8, index: u8) -> bool {
        match self {
            Color::White => other > index,
            Color::Black => other < index,
        }
    }

    /// Raw sentinel used at the boundary for "bear off" for this color.
    pub fn bear_off_sentinel(&self) -> i32 {
        match self {
            Color::White => 24,
            Color::Black => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            other => Err(RulesError::InvalidColor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        assert_eq!(Color::White.entry_point(1), 23);
        assert_eq!(Color::White.entry_point(6), 18);
        assert_eq!(Color::Black.entry_point(1), 0);
        assert_eq!(Color::Black.entry_point(6), 5);
        for die in 1..=6 {
            assert!(Color::White.home_range().contains(&Color::White.entry_point(die)));
            assert!(Color::Black.home_range().contains(&Color::Black.entry_point(die)));
        }
    }

    #[test]
    fn test_bear_off_distance() {
        assert_eq!(Color::White.bear_off_distance(23), 1);
        assert_eq!(Color::White.bear_off_distance(18), 6);
        assert_eq!(Color::Black.bear_off_distance(0), 1);
        assert_eq!(Color::Black.bear_off_distance(5), 6);
    }

    #[test]
    fn test_parse() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("red".parse::<Color>(), Err(RulesError::InvalidColor("red".into())));
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Color::White.distance(0, 5), 5);
        assert_eq!(Color::Black.distance(0, 5), -5);
        assert!(Color::White.is_ahead_of(22, 20));
        assert!(Color::Black.is_ahead_of(1, 3));
        assert!(!Color::White.is_ahead_of(20, 20));
    }
}
