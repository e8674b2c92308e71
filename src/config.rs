use serde::Deserialize;

use crate::backgammon::Color;

/// Everything needed to start (or restart) a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
    pub starting_color: Color,
    /// Fixed dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            starting_color: Color::White,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        GameConfig { seed: Some(seed), ..Default::default() }
    }
}

/// Settings for a batch of random self-play games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    pub games: u32,
    /// Base seed; game `i` uses `seed + i`.
    pub seed: u64,
    /// Turn limit after which a game is abandoned without a winner.
    pub max_turns: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig { games: 100, seed: 0, max_turns: 5_000 }
    }
}
