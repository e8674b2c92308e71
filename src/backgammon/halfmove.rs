use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::backgammon::{Color, Source, Target};

/// A single checker movement paired with the die it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfMove {
    pub from: Source,
    pub to: Target,
    pub die: u8,
}

impl HalfMove {
    pub fn new(from: Source, to: Target, die: u8) -> Self {
        HalfMove { from, to, die }
    }

    /// `(start, end, die)` with `-1`/`24` sentinels as seen by the mover.
    pub fn to_raw(&self, color: Color) -> (i32, i32, u8) {
        (self.from.to_raw(), self.to.to_raw(color), self.die)
    }
}

impl Display for HalfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.die)
    }
}
