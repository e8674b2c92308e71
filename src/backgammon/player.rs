use crate::{backgammon::{Checker, Color}, error::Result};

pub const CHECKERS_PER_PLAYER: usize = 15;

/// A named side of the game.
///
/// The roster is the set of checkers the player was created with. It is not
/// kept in sync with play; the [`crate::backgammon::Board`] is authoritative
/// for what is still in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    checkers: Vec<Checker>,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            checkers: (0..CHECKERS_PER_PLAYER).map(|_| Checker::new(color)).collect(),
        }
    }

    pub fn from_color_name(name: impl Into<String>, color: &str) -> Result<Self> {
        Ok(Player::new(name, color.parse()?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn checkers(&self) -> &[Checker] {
        &self.checkers
    }
}
