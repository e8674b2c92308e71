use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{backgammon::Color, error::{Result, RulesError}};

/// Raw boundary value meaning "from the bar".
pub const BAR_SENTINEL: i32 = -1;

/// Where a checker is moved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Bar,
    Point(u8),
}

/// Where a checker is moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Point(u8),
    BearOff,
}

fn point_from_raw(raw: i32) -> Result<u8> {
    u8::try_from(raw)
        .ok()
        .filter(|&i| i < 24)
        .ok_or(RulesError::IndexOutOfRange(raw as i64))
}

impl Source {
    /// `-1` is the bar, `0..=23` a point.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            BAR_SENTINEL => Ok(Source::Bar),
            raw => point_from_raw(raw).map(Source::Point),
        }
    }

    pub fn to_raw(&self) -> i32 {
        match self {
            Source::Bar => BAR_SENTINEL,
            Source::Point(i) => *i as i32,
        }
    }
}

impl Target {
    /// `0..=23` is a point; `24` for white or `-1` for black means bear off.
    pub fn from_raw(raw: i32, color: Color) -> Result<Self> {
        if raw == color.bear_off_sentinel() {
            Ok(Target::BearOff)
        } else {
            point_from_raw(raw).map(Target::Point)
        }
    }

    pub fn to_raw(&self, color: Color) -> i32 {
        match self {
            Target::Point(i) => *i as i32,
            Target::BearOff => color.bear_off_sentinel(),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bar => write!(f, "bar"),
            Source::Point(i) => write!(f, "{i}"),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Point(i) => write!(f, "{i}"),
            Target::BearOff => write!(f, "off"),
        }
    }
}
