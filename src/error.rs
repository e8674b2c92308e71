use thiserror::Error;

use crate::backgammon::Color;

pub type Result<T> = std::result::Result<T, RulesError>;

/// Every way a call into the rules engine can be refused.
///
/// None of these are fatal: the board is left untouched and the caller is
/// expected to report the message and ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("point index {0} is out of range (expected 0..=23)")]
    IndexOutOfRange(i64),

    #[error("invalid color {0:?} (expected \"white\" or \"black\")")]
    InvalidColor(String),

    #[error("invalid die value {0} (expected 1..=6)")]
    InvalidDieValue(u8),

    #[error("a roll must contain between 1 and 4 dice, got {0}")]
    InvalidRollSize(usize),

    #[error("no active roll, roll the dice first")]
    NoActiveRoll,

    #[error("a roll is already active, use it or end the turn")]
    RollAlreadyActive,

    #[error("it is {expected}'s turn, {got} cannot move")]
    WrongTurn { expected: Color, got: Color },

    #[error("{0} has checkers on the bar and must enter them first")]
    MustEnterFromBar(Color),

    #[error("no die in {dice:?} enters {color} on point {end}")]
    NoMatchingDieForEntry { color: Color, end: i64, dice: Vec<u8> },

    #[error("point {index} is blocked by {count} {by} checkers")]
    PointBlocked { index: u8, count: usize, by: Color },

    #[error("{color} cannot move from {start} to {end}")]
    WrongDirection { color: Color, start: u8, end: u8 },

    #[error("distance {distance} does not match the roll {dice:?}")]
    DistanceNotInRoll { distance: u8, dice: Vec<u8> },

    #[error("no {color} checker on point {index}")]
    NoCheckerOfColorAtOrigin { color: Color, index: u8 },

    #[error("{0} cannot bear off until every checker is in the home board")]
    NotAllInHome(Color),

    #[error("an exact {need} is required while a checker sits farther from home")]
    ExactDieRequired { need: u8 },

    #[error("no die of {need} or higher in {dice:?} to bear off with")]
    NoUsableDieForBearOff { need: u8, dice: Vec<u8> },

    #[error("checker is not on point {0}")]
    CheckerNotAtOrigin(u8),

    #[error("point {0} is empty")]
    EmptyPoint(u8),

    #[error("{0} has no checkers on the bar")]
    EmptyBar(Color),
}

impl RulesError {
    /// True for errors that reject a particular move, as opposed to errors
    /// about turn state or malformed input.
    pub fn is_move_rejection(&self) -> bool {
        matches!(
            self,
            RulesError::MustEnterFromBar(_)
                | RulesError::NoMatchingDieForEntry { .. }
                | RulesError::PointBlocked { .. }
                | RulesError::WrongDirection { .. }
                | RulesError::DistanceNotInRoll { .. }
                | RulesError::NoCheckerOfColorAtOrigin { .. }
                | RulesError::NotAllInHome(_)
                | RulesError::ExactDieRequired { .. }
                | RulesError::NoUsableDieForBearOff { .. }
                | RulesError::CheckerNotAtOrigin(_)
                | RulesError::EmptyPoint(_)
                | RulesError::EmptyBar(_)
        )
    }
}
