pub mod backgammon;
pub mod config;
pub mod error;
pub mod playout;
mod misc;

pub use backgammon::{Board, Checker, Color, DiceRoll, DiceRoller, EngineState, GameEngine, HalfMove, Player, Source, Target};
pub use config::{GameConfig, PlayoutConfig};
pub use error::{Result, RulesError};
